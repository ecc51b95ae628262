//! Scope-stack construction of the program tree.

use smol_str::SmolStr;

use super::{Model, Port, PortId, Program, ProgramId, ProgramKind};
use crate::annotations::{AnnotationId, AnnotationStream, Qualified};
use crate::base::Location;
use crate::config::ModelerConfig;
use crate::errors::{MarkupError, Result};
use crate::parser::{Direction, Tag};

/// An open scope.
#[derive(Debug, Clone, Copy)]
struct Frame {
    program: ProgramId,
    /// Inputs declared since the last `@begin`, `@call` or `@end` start here
    pending_in: usize,
    /// Outputs declared since the last `@begin`, `@call` or `@end` start here
    pending_out: usize,
}

/// Builds a [`Model`] from the primary annotations of a stream.
///
/// Each build owns its arenas and frame stack; nothing is shared between
/// builds.
pub struct ModelBuilder<'s> {
    stream: &'s AnnotationStream,
    config: &'s ModelerConfig,
    pub(super) model: Model,
    stack: Vec<Frame>,
}

impl<'s> ModelBuilder<'s> {
    pub fn new(stream: &'s AnnotationStream, config: &'s ModelerConfig) -> Self {
        Self {
            stream,
            config,
            model: Model::default(),
            stack: Vec::new(),
        }
    }

    pub fn build(mut self) -> Result<Model> {
        for annotation in self.stream.iter_qualified() {
            self.visit(annotation)?;
        }

        if let Some(frame) = self.stack.last() {
            let program = &self.model.programs[frame.program.index()];
            let location = self.location_of(program.begin);
            return Err(MarkupError::UnclosedScope {
                location,
                name: program.name.clone(),
            });
        }

        self.select_root();
        tracing::debug!(
            programs = self.model.programs.len(),
            ports = self.model.ports.len(),
            channels = self.model.channels.len(),
            "built model"
        );
        Ok(self.model)
    }

    fn visit(&mut self, annotation: Qualified<'_>) -> Result<()> {
        match annotation.tag() {
            Tag::Begin => self.open(annotation, ProgramKind::Block),
            Tag::Create => self.open(annotation, ProgramKind::Synthesized),
            Tag::End => self.close(annotation),
            Tag::Call => self.call(annotation),
            Tag::In | Tag::Out | Tag::Param | Tag::Return => self.declare_port(annotation),
            // Qualifiers reach the builder only through `Qualified`
            Tag::As | Tag::Uri | Tag::File => Ok(()),
        }
    }

    // ------------------------------------------------------------------------
    // Scopes
    // ------------------------------------------------------------------------

    fn open(&mut self, annotation: Qualified<'_>, kind: ProgramKind) -> Result<()> {
        let parent = self.stack.last().map(|f| f.program);
        let id = self.add_program(annotation, kind, parent);
        self.reset_pending();
        self.stack.push(Frame {
            program: id,
            pending_in: 0,
            pending_out: 0,
        });
        tracing::debug!(name = annotation.name(), depth = self.stack.len(), "open scope");
        Ok(())
    }

    fn close(&mut self, annotation: Qualified<'_>) -> Result<()> {
        let location = annotation.primary.location;
        let Some(frame) = self.stack.pop() else {
            return Err(MarkupError::UnmatchedEnd {
                location,
                name: annotation.primary.name.clone(),
            });
        };

        let id = frame.program;
        let program = &self.model.programs[id.index()];
        if program.name.as_str() != annotation.name() {
            return Err(MarkupError::MismatchedEnd {
                location,
                expected: program.name.clone(),
                found: annotation.primary.name.clone(),
                opened_at: self.location_of(program.begin),
            });
        }

        self.model.programs[id.index()].end = Some(annotation.primary.id);
        self.infer_channels(id);

        match self.stack.last().map(|f| f.program) {
            Some(parent) => self.model.programs[parent.index()].children.push(id),
            None => self.model.top_level.push(id),
        }
        self.reset_pending();
        tracing::debug!(name = annotation.name(), depth = self.stack.len(), "close scope");
        Ok(())
    }

    /// An invocation leaf takes over the ports declared just before it.
    fn call(&mut self, annotation: Qualified<'_>) -> Result<()> {
        let Some(frame) = self.stack.last().copied() else {
            return Err(self.outside_scope(annotation));
        };

        let leaf = self.add_program(annotation, ProgramKind::Invocation, Some(frame.program));
        let scope = &mut self.model.programs[frame.program.index()];
        let inputs: Vec<PortId> = scope.in_ports.drain(frame.pending_in..).collect();
        let outputs: Vec<PortId> = scope.out_ports.drain(frame.pending_out..).collect();
        scope.children.push(leaf);

        for port in inputs.iter().chain(&outputs) {
            self.model.ports[port.index()].owner = leaf;
        }
        let leaf_program = &mut self.model.programs[leaf.index()];
        leaf_program.in_ports = inputs;
        leaf_program.out_ports = outputs;

        self.reset_pending();
        tracing::debug!(name = annotation.name(), "call");
        Ok(())
    }

    fn add_program(
        &mut self,
        annotation: Qualified<'_>,
        kind: ProgramKind,
        parent: Option<ProgramId>,
    ) -> ProgramId {
        let id = ProgramId::new(self.model.programs.len());
        self.model.programs.push(Program::new(
            id,
            annotation.primary.name.clone(),
            kind,
            parent,
            annotation.primary.id,
        ));
        id
    }

    /// Start a new pending run in the innermost open scope
    fn reset_pending(&mut self) {
        if let Some(frame) = self.stack.last_mut() {
            let program = &self.model.programs[frame.program.index()];
            frame.pending_in = program.in_ports.len();
            frame.pending_out = program.out_ports.len();
        }
    }

    // ------------------------------------------------------------------------
    // Ports
    // ------------------------------------------------------------------------

    fn declare_port(&mut self, annotation: Qualified<'_>) -> Result<()> {
        let Some(frame) = self.stack.last().copied() else {
            return Err(self.outside_scope(annotation));
        };
        let Some(direction) = annotation.direction() else {
            return Ok(());
        };

        let scope = frame.program;
        let binding = annotation.binding();
        let program = &self.model.programs[scope.index()];
        let duplicate = program
            .ports(direction)
            .into_iter()
            .any(|p| self.model.ports[p.index()].binding.as_str() == binding);
        if duplicate {
            return Err(MarkupError::DuplicateBinding {
                location: annotation.primary.location,
                scope: program.name.clone(),
                direction,
                binding: SmolStr::new(binding),
            });
        }

        let id = PortId::new(self.model.ports.len());
        self.model.ports.push(Port {
            id,
            owner: scope,
            annotation: annotation.primary.id,
            tag: annotation.tag(),
            direction,
            name: annotation.primary.name.clone(),
            name_kind: annotation.primary.name_kind,
            binding: SmolStr::new(binding),
            description: annotation.description(),
            uri: annotation.uri(),
        });

        let program = &mut self.model.programs[scope.index()];
        match (annotation.tag(), direction) {
            (Tag::Return, _) => program.return_ports.push(id),
            (_, Direction::Input) => program.in_ports.push(id),
            (_, Direction::Output) => program.out_ports.push(id),
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    fn outside_scope(&self, annotation: Qualified<'_>) -> MarkupError {
        MarkupError::OutsideScope {
            location: annotation.primary.location,
            tag: annotation.tag(),
            name: annotation.primary.name.clone(),
        }
    }

    fn location_of(&self, id: AnnotationId) -> Location {
        self.stream
            .get(id)
            .map(|a| a.location)
            .unwrap_or_default()
    }

    fn select_root(&mut self) {
        self.model.root = match &self.config.workflow {
            Some(name) => {
                let found = self
                    .model
                    .top_level
                    .iter()
                    .copied()
                    .find(|id| self.model.programs[id.index()].name == *name);
                if found.is_none() {
                    tracing::warn!(workflow = name.as_str(), "configured workflow not found");
                }
                found
            }
            None => self.model.top_level.first().copied(),
        };

        if self.model.top_level.is_empty() {
            tracing::warn!("no scopes found in annotations");
        }
    }
}

/// Build the model for an annotation stream.
pub fn build_model(stream: &AnnotationStream, config: &ModelerConfig) -> Result<Model> {
    ModelBuilder::new(stream, config).build()
}
