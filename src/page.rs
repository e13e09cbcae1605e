// File: src/page.rs
// Purpose: Maud templates for the contact page

use maud::{html, Markup, DOCTYPE};

use crate::form::{FieldName, InquiryType};
use crate::form_context::FormContext;

/// Render the full contact page for the given context
pub fn contact_page(ctx: &FormContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "Contact" }
                link rel="stylesheet" href="/static/contact.css";
            }
            body {
                div class="contact" {
                    p {
                        "The phonetic reading must be full-width katakana and \
                         the email address must be well formed. All fields are \
                         required."
                    }
                    form method="post" action="/" {
                        (text_field(ctx, FieldName::Name, "Name"))
                        (text_field(ctx, FieldName::PhoneticReading, "Phonetic reading"))
                        (text_field(ctx, FieldName::Email, "Email address"))
                        (inquiry_select(ctx))
                        label for="message" { "Details" }
                        textarea id="message"
                            name="message"
                            required
                            class=[error_class(ctx, FieldName::Message)]
                        {
                            (ctx.value(FieldName::Message))
                        }
                        button type="submit" { "Send" }
                    }
                    h3 { "Status" }
                    @if let Some((label, message)) = ctx.status() {
                        p class="status" { (label) ": " (message) }
                    }
                }
            }
        }
    }
}

/// A labelled text input, repopulated and flagged from the context
fn text_field(ctx: &FormContext, field: FieldName, label: &str) -> Markup {
    let name = field.as_str();
    html! {
        label for=(name) { (label) }
        input type="text"
            id=(name)
            name=(name)
            required
            value=(ctx.value(field))
            class=[error_class(ctx, field)];
    }
}

/// The inquiry-type select; keeps the submitted choice selected
fn inquiry_select(ctx: &FormContext) -> Markup {
    let name = FieldName::InquiryType.as_str();
    let current = ctx.value(FieldName::InquiryType);
    html! {
        label for=(name) { "Inquiry type" }
        select id=(name)
            name=(name)
            required
            class=[error_class(ctx, FieldName::InquiryType)]
        {
            @for ty in InquiryType::ALL {
                option value=(ty.value()) selected[current == ty.value()] {
                    (ty.label())
                }
            }
        }
    }
}

fn error_class(ctx: &FormContext, field: FieldName) -> Option<&'static str> {
    ctx.has_error(field).then_some("field-error")
}
