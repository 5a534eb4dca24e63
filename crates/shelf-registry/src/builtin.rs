use shelf_types::{ResourceTypeDefinition, DEFINITION_PLURAL};

/// Built-in definitions of package `core`, keyed by plural token.
const BUILTINS: &[(&str, fn() -> ResourceTypeDefinition)] =
    &[(DEFINITION_PLURAL, ResourceTypeDefinition::bootstrap)];

/// Look up a built-in `core` definition. Synthesized fresh on every call.
pub fn builtin(plural: &str) -> Option<ResourceTypeDefinition> {
    BUILTINS
        .iter()
        .find(|(token, _)| *token == plural)
        .map(|(_, make)| make())
}

/// All built-in definitions.
pub fn builtin_definitions() -> Vec<ResourceTypeDefinition> {
    BUILTINS.iter().map(|(_, make)| make()).collect()
}
