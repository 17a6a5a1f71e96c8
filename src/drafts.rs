//! Form Drafts
//!
//! Unsaved form input, owned by one view.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterDraft {
    pub email: String,
    pub password: String,
    pub confirm: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutDraft {
    pub email: String,
    pub name: String,
}

impl CheckoutDraft {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_draft_clear() {
        let mut draft = CheckoutDraft {
            email: "ann@example.com".into(),
            name: "Ann".into(),
        };
        draft.clear();
        assert_eq!(draft, CheckoutDraft::default());
    }
}
