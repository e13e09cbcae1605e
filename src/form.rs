// File: src/form.rs
// Purpose: Contact form payload, field names, and the inquiry-type set

use serde::Deserialize;

/// Raw values submitted from the contact form
///
/// Built fresh per submission from the urlencoded request body. Every field
/// defaults to the empty string so a partial body still reaches validation
/// instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub phonetic_reading: String,
    pub email: String,
    pub inquiry_type: String,
    pub message: String,
}

impl ContactForm {
    /// Get the value of a field by name
    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::PhoneticReading => &self.phonetic_reading,
            FieldName::Email => &self.email,
            FieldName::InquiryType => &self.inquiry_type,
            FieldName::Message => &self.message,
        }
    }

    /// Trim surrounding whitespace from every field
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phonetic_reading: self.phonetic_reading.trim().to_string(),
            email: self.email.trim().to_string(),
            inquiry_type: self.inquiry_type.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// The five form fields, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    Name,
    PhoneticReading,
    Email,
    InquiryType,
    Message,
}

impl FieldName {
    /// Wire name, used for HTML `name=` attributes and error reporting
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::PhoneticReading => "phonetic_reading",
            FieldName::Email => "email",
            FieldName::InquiryType => "inquiry_type",
            FieldName::Message => "message",
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of inquiry subjects a submitter can select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryType {
    DefectReport,
    FeatureRequest,
    Other,
}

impl InquiryType {
    /// All variants, in the order the select renders them
    pub const ALL: [InquiryType; 3] = [
        InquiryType::DefectReport,
        InquiryType::FeatureRequest,
        InquiryType::Other,
    ];

    /// Submitted option value
    pub fn value(&self) -> &'static str {
        match self {
            InquiryType::DefectReport => "defect-report",
            InquiryType::FeatureRequest => "feature-request",
            InquiryType::Other => "other",
        }
    }

    /// Label shown in the select
    pub fn label(&self) -> &'static str {
        match self {
            InquiryType::DefectReport => "Defect report",
            InquiryType::FeatureRequest => "Feature request",
            InquiryType::Other => "Other",
        }
    }

    /// Parse a submitted value, returning None for anything outside the set
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.value() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_wire_names() {
        assert_eq!(FieldName::Name.as_str(), "name");
        assert_eq!(FieldName::PhoneticReading.as_str(), "phonetic_reading");
        assert_eq!(FieldName::Email.as_str(), "email");
        assert_eq!(FieldName::InquiryType.as_str(), "inquiry_type");
        assert_eq!(FieldName::Message.as_str(), "message");
    }

    #[test]
    fn test_value_lookup() {
        let form = ContactForm {
            name: "田中".to_string(),
            phonetic_reading: "タナカ".to_string(),
            email: "a@example.com".to_string(),
            inquiry_type: "defect-report".to_string(),
            message: "it broke".to_string(),
        };

        assert_eq!(form.value(FieldName::Name), "田中");
        assert_eq!(form.value(FieldName::PhoneticReading), "タナカ");
        assert_eq!(form.value(FieldName::Email), "a@example.com");
        assert_eq!(form.value(FieldName::InquiryType), "defect-report");
        assert_eq!(form.value(FieldName::Message), "it broke");
    }

    #[test]
    fn test_trimming() {
        let form = ContactForm {
            name: "  田中  ".to_string(),
            email: "\ta@example.com\n".to_string(),
            ..ContactForm::default()
        }
        .trimmed();

        assert_eq!(form.name, "田中");
        assert_eq!(form.email, "a@example.com");
    }

    #[test]
    fn test_inquiry_type_parse() {
        assert_eq!(
            InquiryType::parse("defect-report"),
            Some(InquiryType::DefectReport)
        );
        assert_eq!(
            InquiryType::parse("feature-request"),
            Some(InquiryType::FeatureRequest)
        );
        assert_eq!(InquiryType::parse("other"), Some(InquiryType::Other));

        assert_eq!(InquiryType::parse(""), None);
        assert_eq!(InquiryType::parse("spam"), None);
        assert_eq!(InquiryType::parse("Defect-Report"), None);
    }

    #[test]
    fn test_inquiry_type_labels() {
        assert_eq!(InquiryType::DefectReport.label(), "Defect report");
        assert_eq!(InquiryType::FeatureRequest.label(), "Feature request");
        assert_eq!(InquiryType::Other.label(), "Other");
    }
}
