//! Modal form state: the Add Lead and Add Property forms.
//!
//! Forms hold only local field text. Submitting turns the text into a core
//! input struct; closing a form discards everything typed into it.

use realdesk_core::describe::DescriptionRequest;
use realdesk_core::lead::initials_avatar_url;
use realdesk_core::money::parse_amount;
use realdesk_core::{NewLead, NewProperty};

/// One single-line text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub required: bool,
}

impl TextField {
    fn new(label: &'static str, placeholder: &'static str, required: bool) -> Self {
        Self {
            label,
            placeholder,
            value: String::new(),
            required,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Ordered fields with a focus cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub fields: Vec<TextField>,
    pub focus: usize,
}

impl Form {
    fn new(fields: Vec<TextField>) -> Self {
        Self { fields, focus: 0 }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn push_char(&mut self, c: char) {
        self.fields[self.focus].value.push(c);
    }

    pub fn backspace(&mut self) {
        self.fields[self.focus].value.pop();
    }

    /// Label of the first required field left blank.
    pub fn first_missing(&self) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|f| f.required && f.is_blank())
            .map(|f| f.label)
    }

    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focus = 0;
    }

    fn value(&self, i: usize) -> &str {
        &self.fields[i].value
    }

    fn set_value(&mut self, i: usize, value: String) {
        self.fields[i].value = value;
    }
}

fn optional(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Add Lead form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadForm {
    pub form: Form,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadForm {
    const NAME: usize = 0;
    const EMAIL: usize = 1;
    const PHONE: usize = 2;
    const BUDGET: usize = 3;
    const INTEREST: usize = 4;
    const NOTES: usize = 5;

    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                TextField::new("Full Name", "Jane Doe", true),
                TextField::new("Email", "jane@example.com", true),
                TextField::new("Phone", "(555) 123-4567", true),
                TextField::new("Budget ($)", "450000", false),
                TextField::new(
                    "Interested In / Requirements",
                    "e.g. 2BR downtown apartment with balcony",
                    true,
                ),
                TextField::new("Notes", "Add any specific requirements or notes...", false),
            ]),
        }
    }

    /// Build the store input, or name the first blank required field.
    ///
    /// Budget text that is not a number becomes 0. Unset optional fields
    /// default: no notes, an initials avatar, no assigned agent.
    pub fn to_new_lead(&self) -> Result<NewLead, &'static str> {
        if let Some(missing) = self.form.first_missing() {
            return Err(missing);
        }
        let name = self.form.value(Self::NAME).trim().to_string();
        Ok(NewLead {
            avatar: Some(initials_avatar_url(&name)),
            name,
            email: self.form.value(Self::EMAIL).trim().to_string(),
            phone: self.form.value(Self::PHONE).trim().to_string(),
            budget: parse_amount(self.form.value(Self::BUDGET)),
            interest: self.form.value(Self::INTEREST).trim().to_string(),
            notes: optional(self.form.value(Self::NOTES)),
            assigned_to: None,
            created_at: None,
        })
    }
}

/// Add Property form, including the description drafting hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyForm {
    pub form: Form,
    /// Id of the generation request in flight, if any.
    pub pending_generation: Option<u64>,
}

impl Default for PropertyForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyForm {
    const TITLE: usize = 0;
    const PRICE: usize = 1;
    const ADDRESS: usize = 2;
    const FEATURES: usize = 3;
    const TONE: usize = 4;
    const DESCRIPTION: usize = 5;

    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                TextField::new("Property Title", "e.g. Sunny Villa", true),
                TextField::new("Price ($)", "500000", true),
                TextField::new("Address", "123 Street Name", true),
                TextField::new(
                    "Key Features/Specs",
                    "3 bed, 2 bath, garden, renovated kitchen",
                    false,
                ),
                TextField::new("Vibe/Tone", "Luxury, Cozy, Modern, Family-friendly", false),
                TextField::new("Description", "Property description will appear here...", false),
            ]),
            pending_generation: None,
        }
    }

    pub fn is_generating(&self) -> bool {
        self.pending_generation.is_some()
    }

    /// Generation needs a title and features, and only one request at a time.
    pub fn can_generate(&self) -> bool {
        !self.is_generating()
            && !self.form.fields[Self::TITLE].is_blank()
            && !self.form.fields[Self::FEATURES].is_blank()
    }

    pub fn description_request(&self) -> Option<DescriptionRequest> {
        self.can_generate().then(|| DescriptionRequest {
            title: self.form.value(Self::TITLE).trim().to_string(),
            features: self.form.value(Self::FEATURES).trim().to_string(),
            tone: optional(self.form.value(Self::TONE)),
        })
    }

    pub fn description(&self) -> &str {
        self.form.value(Self::DESCRIPTION)
    }

    pub fn set_description(&mut self, text: String) {
        self.form.set_value(Self::DESCRIPTION, text);
    }

    pub fn to_new_property(&self) -> Result<NewProperty, &'static str> {
        if let Some(missing) = self.form.first_missing() {
            return Err(missing);
        }
        Ok(NewProperty {
            title: self.form.value(Self::TITLE).trim().to_string(),
            address: self.form.value(Self::ADDRESS).trim().to_string(),
            price: parse_amount(self.form.value(Self::PRICE)),
            description: optional(self.description()),
        })
    }
}
