//! # Workflow Model
//!
//! The nested program tree recovered from an annotation stream.
//!
//! ## Design
//!
//! Programs, ports, channels and data entities live in flat arenas owned by
//! the [`Model`] and refer to each other by typed index. The tree is acyclic:
//! a program owns its children through `children`, and `parent` is a plain
//! back-reference.
//!
//! ```text
//! Model
//! ├── programs: Vec<Program>   (id order = scope open order)
//! ├── ports:    Vec<Port>      (id order = declaration order)
//! ├── channels: Vec<Channel>
//! ├── data:     Vec<Data>
//! └── top_level / root
//! ```
//!
//! Workflow and function are capabilities of a [`Program`], not subtypes.

mod builder;
mod channels;

pub use builder::{ModelBuilder, build_model};

use std::fmt;

use smol_str::SmolStr;

use crate::annotations::{AnnotationId, NameKind};
use crate::parser::{Direction, Tag};

// ============================================================================
// IDS
// ============================================================================

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "interchange", derive(serde::Serialize))]
        pub struct $name(pub u32);

        impl $name {
            pub fn new(index: usize) -> Self {
                Self(index as u32)
            }

            /// Get the index into the arena
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

arena_id!(
    /// Index of a program in the model
    ProgramId
);
arena_id!(
    /// Index of a port in the model
    PortId
);
arena_id!(
    /// Index of a channel in the model
    ChannelId
);
arena_id!(
    /// Index of a data entity in the model
    DataId
);

// ============================================================================
// PORT
// ============================================================================

/// A port declared by `@in`, `@out`, `@param` or `@return`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Port {
    pub id: PortId,
    /// Program the port was declared in
    pub owner: ProgramId,
    pub annotation: AnnotationId,
    pub tag: Tag,
    pub direction: Direction,
    pub name: SmolStr,
    pub name_kind: NameKind,
    /// Alias from `@as`, else the name
    pub binding: SmolStr,
    pub description: Option<String>,
    pub uri: Option<String>,
}

impl Port {
    pub fn is_parameter(&self) -> bool {
        self.tag == Tag::Param
    }

    pub fn is_return(&self) -> bool {
        self.tag == Tag::Return
    }

    /// Whether `@as` rebound this port
    pub fn is_aliased(&self) -> bool {
        self.binding != self.name
    }
}

// ============================================================================
// PROGRAM
// ============================================================================

/// How a program's scope came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum ProgramKind {
    /// `@begin` ... `@end` with its body in source
    Block,
    /// `@create` ... `@end`, body supplied externally
    Synthesized,
    /// `@call`, an invocation site with no body
    Invocation,
}

/// A named scope.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Program {
    pub id: ProgramId,
    pub name: SmolStr,
    pub kind: ProgramKind,
    pub parent: Option<ProgramId>,
    /// The `@begin`, `@create` or `@call` annotation
    pub begin: AnnotationId,
    /// The closing `@end`; `None` for invocations
    pub end: Option<AnnotationId>,
    /// Declared inputs then inputs promoted from children
    pub in_ports: Vec<PortId>,
    /// Declared outputs then outputs promoted from children
    pub out_ports: Vec<PortId>,
    pub return_ports: Vec<PortId>,
    pub children: Vec<ProgramId>,
    pub channels: Vec<ChannelId>,
    pub data: Vec<DataId>,
}

impl Program {
    pub(crate) fn new(
        id: ProgramId,
        name: SmolStr,
        kind: ProgramKind,
        parent: Option<ProgramId>,
        begin: AnnotationId,
    ) -> Self {
        Self {
            id,
            name,
            kind,
            parent,
            begin,
            end: None,
            in_ports: Vec::new(),
            out_ports: Vec::new(),
            return_ports: Vec::new(),
            children: Vec::new(),
            channels: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Top-level programs and programs with nested programs are workflows
    pub fn is_workflow(&self) -> bool {
        self.parent.is_none() || !self.children.is_empty()
    }

    /// Programs declaring `@return` ports are functions
    pub fn is_function(&self) -> bool {
        !self.return_ports.is_empty()
    }

    pub fn is_synthesized(&self) -> bool {
        self.kind == ProgramKind::Synthesized
    }

    pub fn is_invocation(&self) -> bool {
        self.kind == ProgramKind::Invocation
    }

    /// Outputs including returns, in declaration order of the two lists
    pub fn outputs(&self) -> impl Iterator<Item = PortId> + '_ {
        self.out_ports.iter().chain(&self.return_ports).copied()
    }

    pub fn ports(&self, direction: Direction) -> Vec<PortId> {
        match direction {
            Direction::Input => self.in_ports.clone(),
            Direction::Output => self.outputs().collect(),
        }
    }
}

// ============================================================================
// CHANNEL / DATA
// ============================================================================

/// Inferred data-flow link from a producer port to a consumer port.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Channel {
    pub id: ChannelId,
    /// Program the channel was inferred in
    pub scope: ProgramId,
    pub source: PortId,
    pub sink: PortId,
    pub data: DataId,
}

/// An artifact flowing through ports, identified by URI or else binding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Data {
    pub id: DataId,
    pub scope: ProgramId,
    pub name: SmolStr,
    pub uri: Option<String>,
    pub ports: Vec<PortId>,
}

// ============================================================================
// MODEL
// ============================================================================

/// The finished, read-only workflow model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Model {
    pub(crate) programs: Vec<Program>,
    pub(crate) ports: Vec<Port>,
    pub(crate) channels: Vec<Channel>,
    pub(crate) data: Vec<Data>,
    pub(crate) top_level: Vec<ProgramId>,
    pub(crate) root: Option<ProgramId>,
}

impl Model {
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn data(&self) -> &[Data] {
        &self.data
    }

    pub fn program(&self, id: ProgramId) -> &Program {
        &self.programs[id.index()]
    }

    pub fn port(&self, id: PortId) -> &Port {
        &self.ports[id.index()]
    }

    pub fn channel(&self, id: ChannelId) -> &Channel {
        &self.channels[id.index()]
    }

    pub fn datum(&self, id: DataId) -> &Data {
        &self.data[id.index()]
    }

    /// Programs closed with the stack empty, in closing order
    pub fn top_level(&self) -> impl Iterator<Item = &Program> {
        self.top_level.iter().map(|id| self.program(*id))
    }

    /// The workflow downstream consumers should start from
    pub fn root(&self) -> Option<&Program> {
        self.root.map(|id| self.program(id))
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// First program with the given name, in scope open order
    pub fn find_program(&self, name: &str) -> Option<&Program> {
        self.programs.iter().find(|p| p.name.as_str() == name)
    }

    pub fn children(&self, id: ProgramId) -> impl Iterator<Item = &Program> {
        self.program(id).children.iter().map(|c| self.program(*c))
    }

    pub fn in_ports(&self, id: ProgramId) -> impl Iterator<Item = &Port> {
        self.program(id).in_ports.iter().map(|p| self.port(*p))
    }

    pub fn out_ports(&self, id: ProgramId) -> impl Iterator<Item = &Port> {
        self.program(id).out_ports.iter().map(|p| self.port(*p))
    }

    pub fn return_ports(&self, id: ProgramId) -> impl Iterator<Item = &Port> {
        self.program(id).return_ports.iter().map(|p| self.port(*p))
    }

    pub fn channels_in(&self, id: ProgramId) -> impl Iterator<Item = &Channel> {
        self.program(id).channels.iter().map(|c| self.channel(*c))
    }

    pub fn data_in(&self, id: ProgramId) -> impl Iterator<Item = &Data> {
        self.program(id).data.iter().map(|d| self.datum(*d))
    }

    pub fn workflows(&self) -> impl Iterator<Item = &Program> {
        self.programs.iter().filter(|p| p.is_workflow())
    }

    pub fn functions(&self) -> impl Iterator<Item = &Program> {
        self.programs.iter().filter(|p| p.is_function())
    }

    /// Names of the programs from the top level down to `id`
    pub fn path(&self, id: ProgramId) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(p) = current {
            let program = self.program(p);
            path.push(program.name.as_str());
            current = program.parent;
        }
        path.reverse();
        path
    }
}
