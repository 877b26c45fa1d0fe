/// Placeholder for companies without a dedicated logo.
pub const DEFAULT_LOGO: &str = "/logos/default.svg";

// Companies whose logo has a light and a dark variant.
const THEMED: &[(&str, &str, &str)] = &[
    (
        "databricks",
        "/logos/databricks-light.svg",
        "/logos/databricks-dark.svg",
    ),
    ("datadog", "/logos/datadog-light.svg", "/logos/datadog-dark.svg"),
    ("plaid", "/logos/plaid-light.svg", "/logos/plaid-dark.svg"),
    ("visa", "/logos/visa-light.svg", "/logos/visa-dark.svg"),
];

const PLAIN: &[(&str, &str)] = &[
    ("digitalocean", "/logos/digitalocean.svg"),
    ("atlassian", "/logos/atlassian.svg"),
    ("stripe", "/logos/stripe.svg"),
];

/// Asset path of a company's logo for the current theme.
pub fn company_logo(company: &str, dark: bool) -> &'static str {
    let normalized = company.to_lowercase();
    if let Some((_, light_path, dark_path)) = THEMED.iter().find(|(name, ..)| *name == normalized) {
        return if dark { *dark_path } else { *light_path };
    }
    PLAIN
        .iter()
        .find(|(name, _)| *name == normalized)
        .map_or(DEFAULT_LOGO, |(_, path)| *path)
}
