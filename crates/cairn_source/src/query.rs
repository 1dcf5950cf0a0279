//! The `get_source_file_property` command.

use crate::property::{PropertyKind, SourceProperty};
use crate::registry::SourceRegistry;
use cairn_common::{CommandError, CommandResult};
use cairn_config::Definitions;

/// Reads a property of a source file into a variable.
///
/// `args` must be exactly `[variable, source, property]`. `ABSTRACT` and
/// `WRAP_EXCLUDE` are published as `ON`/`OFF` (unset is `OFF`);
/// `COMPILE_FLAGS` is published verbatim (unset is the empty string). Any
/// other property name is accepted and writes nothing.
///
/// # Errors
///
/// [`CommandError::InvalidArguments`] for the wrong argument count and
/// [`CommandError::NotFound`] for an unknown source. Nothing is written in
/// either case.
pub fn get_source_file_property<S: AsRef<str>>(
    args: &[S],
    registry: &SourceRegistry,
    definitions: &mut Definitions,
) -> CommandResult {
    let [variable, source, property] = args else {
        return Err(CommandError::InvalidArguments);
    };
    let (variable, source, property) = (variable.as_ref(), source.as_ref(), property.as_ref());

    let id = registry
        .find_source(source)
        .ok_or_else(|| CommandError::NotFound(source.to_string()))?;

    let Some(property) = SourceProperty::from_name(property) else {
        tracing::debug!(source, property, "unsupported source property, nothing written");
        return Ok(());
    };

    match property.kind() {
        PropertyKind::Bool => {
            definitions.define_bool(variable, registry.property_as_bool(id, property.name()));
        }
        PropertyKind::String => {
            let value = registry.property(id, property.name()).unwrap_or_default();
            definitions.define(variable, value);
        }
    }
    tracing::debug!(
        variable,
        source,
        %property,
        value = definitions.get_safe(variable),
        "published source property"
    );
    Ok(())
}
