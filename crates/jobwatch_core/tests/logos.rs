use jobwatch_core::{company_logo, DEFAULT_LOGO};

#[test]
fn themed_companies_pick_variant() {
    assert_eq!(company_logo("Plaid", true), "/logos/plaid-dark.svg");
    assert_eq!(company_logo("Plaid", false), "/logos/plaid-light.svg");
    assert_eq!(company_logo("DATADOG", true), "/logos/datadog-dark.svg");
    assert_eq!(company_logo("visa", false), "/logos/visa-light.svg");
}

#[test]
fn plain_companies_ignore_theme() {
    assert_eq!(company_logo("Stripe", true), "/logos/stripe.svg");
    assert_eq!(company_logo("Stripe", false), "/logos/stripe.svg");
    assert_eq!(company_logo("DigitalOcean", false), "/logos/digitalocean.svg");
}

#[test]
fn unknown_company_falls_back_to_default() {
    assert_eq!(company_logo("unknown co", false), DEFAULT_LOGO);
    assert_eq!(DEFAULT_LOGO, "/logos/default.svg");
}
