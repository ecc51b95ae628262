//! Assertion helpers for built models.

use ywmarkup::model::PortId;
use ywmarkup::{Model, Program};

/// Get a program by name, panicking with context if it is missing.
pub fn get_program<'a>(model: &'a Model, name: &str) -> &'a Program {
    model
        .find_program(name)
        .unwrap_or_else(|| panic!("Expected program '{}' to exist", name))
}

/// Bindings of the given ports, in order.
pub fn bindings<'a>(model: &'a Model, ports: &[PortId]) -> Vec<&'a str> {
    ports
        .iter()
        .map(|p| model.port(*p).binding.as_str())
        .collect()
}

/// Names of a program's children, in order.
pub fn child_names<'a>(model: &'a Model, program: &Program) -> Vec<&'a str> {
    model
        .children(program.id)
        .map(|c| c.name.as_str())
        .collect()
}

/// Channels in a scope as (binding, producer owner, consumer owner).
pub fn channel_links<'a>(model: &'a Model, scope: &str) -> Vec<(&'a str, &'a str, &'a str)> {
    let scope = get_program(model, scope);
    model
        .channels_in(scope.id)
        .map(|c| {
            let source = model.port(c.source);
            let sink = model.port(c.sink);
            (
                source.binding.as_str(),
                model.program(source.owner).name.as_str(),
                model.program(sink.owner).name.as_str(),
            )
        })
        .collect()
}

/// Assert every channel joins ports with equal bindings inside its scope.
pub fn assert_channels_well_formed(model: &Model) {
    for channel in model.channels() {
        let source = model.port(channel.source);
        let sink = model.port(channel.sink);
        assert_eq!(
            source.binding, sink.binding,
            "Channel {} joins different bindings",
            channel.id
        );
        assert_ne!(
            source.owner, sink.owner,
            "Channel {} loops on program {}",
            channel.id,
            model.program(source.owner).name
        );
        assert!(
            model.program(channel.scope).channels.contains(&channel.id),
            "Channel {} missing from its scope",
            channel.id
        );
    }
}
