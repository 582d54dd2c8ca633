//! Directory search: case-insensitive substring match on name or specialization.

use crate::models::Provider;

/// Whether `provider` matches `term`. A blank term matches everyone.
pub fn matches(provider: &Provider, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    provider.name.to_lowercase().contains(&needle)
        || provider.specialization.to_lowercase().contains(&needle)
}

/// Providers matching `term`, in roster order.
pub fn filter_providers<'a>(providers: &'a [Provider], term: &str) -> Vec<&'a Provider> {
    providers.iter().filter(|p| matches(p, term)).collect()
}

/// "1 doctor found" / "3 doctors found".
pub fn result_label(count: usize) -> String {
    if count == 1 {
        "1 doctor found".to_string()
    } else {
        format!("{count} doctors found")
    }
}
