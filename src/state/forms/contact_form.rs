//! Contact form state

use super::field::FormField;

/// Service options for the service selector (value, label)
pub const SERVICE_OPTIONS: &[(&str, &str)] = &[
    ("internet", "Internet"),
    ("television", "Television"),
    ("telephony", "Telephony"),
    ("support", "Technical Support"),
];

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    #[allow(dead_code)]
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Owned snapshot of the form values, taken at submit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub fields: Vec<(String, String)>,
}

// Contact Form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub service: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    /// Index into SERVICE_OPTIONS, None until the user picks one
    pub service_index: Option<usize>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name"),
            email: FormField::email("email", "Email"),
            phone: FormField::tel("phone", "Phone (optional)"),
            service: FormField::select("service", "Service"),
            message: FormField::textarea("message", "Message"),
            active_field_index: 0,
            service_index: None,
        }
    }

    /// Cycle the service selector to the next option
    pub fn next_service(&mut self) {
        let next = match self.service_index {
            Some(i) => (i + 1) % SERVICE_OPTIONS.len(),
            None => 0,
        };
        self.select_service(next);
    }

    /// Cycle the service selector to the previous option
    pub fn prev_service(&mut self) {
        let prev = match self.service_index {
            Some(0) | None => SERVICE_OPTIONS.len() - 1,
            Some(i) => i - 1,
        };
        self.select_service(prev);
    }

    fn select_service(&mut self, index: usize) {
        self.service_index = Some(index);
        self.service.value = SERVICE_OPTIONS[index].0.to_string();
    }

    /// Pre-fill the form for a plan picked in the Plans view
    pub fn prefill_for_plan(&mut self, plan_name: &str) {
        self.select_service(0); // plans are internet service
        self.message.value = format!(
            "Hi, I'm interested in the {plan_name} plan. I'd like to receive more information."
        );
    }

    /// Display label for the currently selected service
    pub fn service_label(&self) -> &str {
        match self.service_index {
            Some(i) => SERVICE_OPTIONS[i].1,
            None => "",
        }
    }

    /// Borrow all fields in render order
    pub fn fields(&self) -> [&FormField; 5] {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.service,
            &self.message,
        ]
    }

    /// Borrow all fields mutably in render order
    pub fn fields_mut(&mut self) -> [&mut FormField; 5] {
        [
            &mut self.name,
            &mut self.email,
            &mut self.phone,
            &mut self.service,
            &mut self.message,
        ]
    }

    /// Number of fields carrying an error annotation
    #[allow(dead_code)]
    pub fn error_count(&self) -> usize {
        self.fields().iter().filter(|f| f.has_error()).count()
    }

    /// Reset all field values and annotations (form reset after success)
    pub fn clear_values(&mut self) {
        for field in self.fields_mut() {
            field.clear();
            field.clear_error();
        }
        self.service_index = None;
        self.active_field_index = 0;
    }

    /// Snapshot the current values for submission
    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            fields: self
                .fields()
                .iter()
                .map(|f| (f.name.clone(), f.value.clone()))
                .collect(),
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(4);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.name,
            1 => &mut self.email,
            2 => &mut self.phone,
            3 => &mut self.service,
            _ => &mut self.message,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.service),
            4 => Some(&self.message),
            _ => None,
        }
    }
}
