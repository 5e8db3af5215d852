//! Form-type taxonomy
//!
//! Maps an SEC form type (e.g. `10-K/A`, `S-8 POS`) to a human-facing group
//! by prefix matching. Groups are tested in declaration order and the first
//! group with a matching prefix wins, so the order of [`SEC_FORM_GROUPS`] is
//! significant: `"3"`/`"4"`/`"5"` in the first group claim every form that
//! starts with those digits (including `40-F`, `424B*` and `425`).

/// Group assigned when no prefix matches
pub const FALLBACK_GROUP: &str = "Other";

/// A named bucket of form-type prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormGroup {
    pub name: &'static str,
    pub prefixes: &'static [&'static str],
}

impl FormGroup {
    pub fn matches(&self, form: &str) -> bool {
        self.prefixes.iter().any(|prefix| form.starts_with(prefix))
    }
}

/// Ordered list of form groups
#[derive(Debug, Clone, Copy)]
pub struct FormTaxonomy {
    groups: &'static [FormGroup],
}

pub const SEC_FORM_GROUPS: &[FormGroup] = &[
    FormGroup {
        name: "3,4,5",
        prefixes: &["3", "4", "5"],
    },
    FormGroup {
        name: "Annual Filings",
        prefixes: &["10-K", "20-F", "40-F"],
    },
    FormGroup {
        name: "Quarterly Filings",
        prefixes: &["10-Q"],
    },
    FormGroup {
        name: "Current Reports",
        prefixes: &["8-K", "6-K"],
    },
    FormGroup {
        name: "Proxy Filings",
        prefixes: &["DEF 14A", "DEFA14A", "PRE 14A", "DEFM14A"],
    },
    FormGroup {
        name: "Registration Statements",
        prefixes: &["S-1", "S-3", "S-4", "S-8", "F-1", "F-3", "F-4", "424B"],
    },
    FormGroup {
        name: "Mergers & Acquisitions",
        prefixes: &["425", "SC TO", "SC 13E", "CB"],
    },
    FormGroup {
        name: FALLBACK_GROUP,
        prefixes: &[],
    },
];

/// Process-wide SEC taxonomy
pub static SEC_FORM_TAXONOMY: FormTaxonomy = FormTaxonomy::new(SEC_FORM_GROUPS);

impl FormTaxonomy {
    pub const fn new(groups: &'static [FormGroup]) -> Self {
        Self { groups }
    }

    pub fn sec() -> &'static FormTaxonomy {
        &SEC_FORM_TAXONOMY
    }

    /// Classify a form type. Always returns exactly one group name.
    pub fn classify(&self, form: &str) -> &'static str {
        self.groups
            .iter()
            .find(|group| group.matches(form))
            .map(|group| group.name)
            .unwrap_or(FALLBACK_GROUP)
    }
}
