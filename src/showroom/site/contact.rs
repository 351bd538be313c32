use crate::config::ContactConfig;
use crate::nav::link_with_query;
use serde::Serialize;

pub const CONTACT_PATH: &str = "/contact";

/// Why a visitor is being sent to the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Inquiry,
    Demo,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Inquiry => "inquiry",
            Intent::Demo => "demo",
        }
    }
}

/// `/contact?product=<name>&intent=<intent>`, leaving out an empty product.
pub fn contact_link(product: Option<&str>, intent: Intent) -> String {
    link_with_query(
        CONTACT_PATH,
        &[("product", product), ("intent", Some(intent.as_str()))],
    )
}

/// One entry on the sticky contact rail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactAction {
    pub label: &'static str,
    pub detail: Option<String>,
    pub href: String,
    /// Opens in a new tab.
    pub external: bool,
    /// Part of the compact mobile menu as well as the rail.
    pub show_on_mobile: bool,
}

pub fn contact_actions(contact: &ContactConfig) -> Vec<ContactAction> {
    vec![
        ContactAction {
            label: "Call Us",
            detail: Some(contact.phone_display.clone()),
            href: format!("tel:{}", contact.phone),
            external: false,
            show_on_mobile: true,
        },
        ContactAction {
            label: "Email Us",
            detail: Some(contact.email.clone()),
            href: format!("mailto:{}", contact.email),
            external: false,
            show_on_mobile: false,
        },
        ContactAction {
            label: "Follow Us",
            detail: None,
            href: contact.linkedin.clone(),
            external: true,
            show_on_mobile: false,
        },
        ContactAction {
            label: "Book a 30 Minutes Free Consultation Call",
            detail: None,
            href: contact.calendly.clone(),
            external: true,
            show_on_mobile: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_links_carry_product_and_intent() {
        assert_eq!(
            contact_link(Some("Edge Box"), Intent::Inquiry),
            "/contact?product=Edge+Box&intent=inquiry"
        );
        assert_eq!(contact_link(None, Intent::Demo), "/contact?intent=demo");
        assert_eq!(contact_link(Some(""), Intent::Demo), "/contact?intent=demo");
    }

    #[test]
    fn rail_has_four_actions_two_on_mobile() {
        let contact = ContactConfig {
            phone: "+15550100".to_string(),
            email: "hi@example.com".to_string(),
            ..ContactConfig::default()
        };
        let actions = contact_actions(&contact);
        assert_eq!(actions.len(), 4);
        assert_eq!(actions[0].href, "tel:+15550100");
        assert_eq!(actions[1].href, "mailto:hi@example.com");

        let mobile: Vec<_> = actions
            .iter()
            .filter(|a| a.show_on_mobile)
            .map(|a| a.label)
            .collect();
        assert_eq!(mobile, ["Call Us", "Book a 30 Minutes Free Consultation Call"]);
    }
}
