// Classification prompt construction

use crate::catalog::{Role, RouteCatalog};
use std::fmt::Write;

/// Build the single-message classification prompt for a user query.
///
/// Quotes the query verbatim, embeds both module catalogs with one-line
/// descriptions, and instructs the model to answer strictly with a JSON
/// object carrying `role` and `module`.
pub fn build_prompt(catalog: &RouteCatalog, query: &str) -> String {
    let mut prompt = format!(
        "The user said: \"{query}\".\n\
         You are Tudo Num's AI AutoNavigator. Your job is to understand the user's *intent*\n\
         and decide which module they want to access — even if they phrase it differently.\n\
         \n\
         Use common sense and semantic understanding.\n\
         For example:\n\
         - \"I want to register my hotel\" → Service Provider → Food Partner\n\
         - \"I want to open a restaurant\" → Service Provider → Food Partner\n\
         - \"I want to register as a driver\" → Service Provider → Driver Registration\n\
         - \"I want to sell clothes online\" → Service Provider → E-commerce Store Setup\n\
         - \"I want to order food\" → General User → Food Delivery\n\
         - \"I need a plumber\" → General User → Task Booking\n\
         - \"I want to book a taxi\" → General User → Taxi Booking\n\n"
    );

    write_module_list(&mut prompt, "General user modules:", catalog, Role::GeneralUser);
    prompt.push('\n');
    write_module_list(
        &mut prompt,
        "Service provider modules:",
        catalog,
        Role::ServiceProvider,
    );

    prompt.push_str(
        "\nReply *strictly* in JSON format:\n\
         {\n\
         \x20   \"role\": \"general_user\" or \"service_provider\",\n\
         \x20   \"module\": \"<exact module name from above>\"\n\
         }\n",
    );

    prompt
}

fn write_module_list(out: &mut String, heading: &str, catalog: &RouteCatalog, role: Role) {
    out.push_str(heading);
    out.push('\n');
    for (i, entry) in catalog.modules(role).iter().enumerate() {
        // Never fails when writing into a String
        let _ = writeln!(out, "{}. {} – {}.", i + 1, capitalize(entry.name), entry.hint);
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_quotes_query_verbatim() {
        let catalog = RouteCatalog::builtin();
        let prompt = build_prompt(&catalog, "I want to register my hotel");
        assert!(prompt.contains("The user said: \"I want to register my hotel\"."));
    }

    #[test]
    fn test_prompt_embeds_both_catalogs() {
        let catalog = RouteCatalog::builtin();
        let prompt = build_prompt(&catalog, "anything");
        assert!(prompt.contains("General user modules:"));
        assert!(prompt.contains("Service provider modules:"));
        for entry in catalog.all_modules() {
            assert!(
                prompt.to_lowercase().contains(entry.name),
                "prompt is missing module {:?}",
                entry.name
            );
        }
    }

    #[test]
    fn test_prompt_demands_json_reply() {
        let catalog = RouteCatalog::builtin();
        let prompt = build_prompt(&catalog, "book me a ride");
        assert!(prompt.contains("\"role\": \"general_user\" or \"service_provider\""));
        assert!(prompt.contains("<exact module name from above>"));
    }

    #[test]
    fn test_prompt_handles_empty_query() {
        let catalog = RouteCatalog::builtin();
        let prompt = build_prompt(&catalog, "");
        assert!(prompt.contains("The user said: \"\"."));
    }
}
