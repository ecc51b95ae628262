//! Channel inference and interface promotion for a closed scope.
//!
//! Runs once per scope, when its `@end` is reached. At that point every child
//! has already been closed, so each child's in/out lists hold its final
//! interface (declared ports plus whatever it promoted).

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::builder::ModelBuilder;
use super::{Channel, ChannelId, Data, DataId, PortId, ProgramId};

/// Which member of the scope an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// The scope's own declared ports
    Parent,
    /// Position of the child in the scope's `children`
    Child(usize),
}

#[derive(Debug, Clone, Copy)]
struct Endpoint {
    port: PortId,
    side: Side,
    synthesized: bool,
}

impl Endpoint {
    fn can_feed(&self, consumer: &Endpoint) -> bool {
        if self.side == consumer.side {
            return false;
        }
        !(self.synthesized && consumer.synthesized)
    }
}

/// Identity of a data entity within one scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum DataKey {
    Uri(String),
    Binding(SmolStr),
}

impl ModelBuilder<'_> {
    pub(super) fn infer_channels(&mut self, scope: ProgramId) {
        let (producers, consumers) = self.endpoints(scope);

        let mut consumed = vec![false; consumers.len()];
        let mut produced = vec![false; producers.len()];
        let mut pairs = Vec::new();

        // A producer serves at most one consumer per pass; repeat passes so it
        // can fan out to later consumers with the same binding.
        loop {
            let mut progressed = false;
            for (p, producer) in producers.iter().enumerate() {
                let binding = &self.model.ports[producer.port.index()].binding;
                let found = consumers.iter().enumerate().position(|(c, consumer)| {
                    !consumed[c]
                        && producer.can_feed(consumer)
                        && self.model.ports[consumer.port.index()].binding == *binding
                });
                if let Some(c) = found {
                    consumed[c] = true;
                    produced[p] = true;
                    pairs.push((producer.port, consumers[c].port));
                    progressed = true;
                }
            }
            if !progressed {
                break;
            }
        }

        let promoted_in: Vec<PortId> = consumers
            .iter()
            .zip(&consumed)
            .filter(|(e, matched)| !**matched && matches!(e.side, Side::Child(_)))
            .map(|(e, _)| e.port)
            .collect();
        let promoted_out: Vec<PortId> = producers
            .iter()
            .zip(&produced)
            .filter(|(e, matched)| !**matched && matches!(e.side, Side::Child(_)))
            .map(|(e, _)| e.port)
            .collect();

        let program = &mut self.model.programs[scope.index()];
        program.in_ports.extend(promoted_in);
        program.out_ports.extend(promoted_out);

        let mut data: IndexMap<DataKey, DataId> = IndexMap::new();
        for (source, sink) in pairs {
            let data_id = self.data_for(scope, &mut data, source, sink);
            let id = ChannelId::new(self.model.channels.len());
            self.model.channels.push(Channel {
                id,
                scope,
                source,
                sink,
                data: data_id,
            });
            self.model.programs[scope.index()].channels.push(id);
            tracing::trace!(
                scope = self.model.programs[scope.index()].name.as_str(),
                binding = self.model.ports[source.index()].binding.as_str(),
                source = %source,
                sink = %sink,
                "channel"
            );
        }

        let program = &self.model.programs[scope.index()];
        let interface: Vec<PortId> = program
            .in_ports
            .iter()
            .chain(&program.out_ports)
            .chain(&program.return_ports)
            .copied()
            .collect();
        for port in interface {
            self.data_for(scope, &mut data, port, port);
        }
    }

    /// Producers and consumers of a scope, each in declaration order.
    fn endpoints(&self, scope: ProgramId) -> (Vec<Endpoint>, Vec<Endpoint>) {
        let program = &self.model.programs[scope.index()];
        let parent = |port: PortId| Endpoint {
            port,
            side: Side::Parent,
            synthesized: false,
        };

        let mut producers: Vec<Endpoint> = program.in_ports.iter().copied().map(parent).collect();
        let mut child_inputs = Vec::new();
        for (i, child) in program.children.iter().enumerate() {
            let child = &self.model.programs[child.index()];
            let endpoint = |port: PortId| Endpoint {
                port,
                side: Side::Child(i),
                synthesized: child.is_synthesized(),
            };
            producers.extend(child.outputs().map(endpoint));
            child_inputs.extend(child.in_ports.iter().copied().map(endpoint));
        }

        let mut consumers = child_inputs;
        consumers.extend(program.outputs().map(parent));
        (producers, consumers)
    }

    /// Data entity shared by `a` and `b`, registering both ports on it.
    fn data_for(
        &mut self,
        scope: ProgramId,
        data: &mut IndexMap<DataKey, DataId>,
        a: PortId,
        b: PortId,
    ) -> DataId {
        let (binding, uri) = {
            let first = &self.model.ports[a.index()];
            let second = &self.model.ports[b.index()];
            let uri = first.uri.clone().or_else(|| second.uri.clone());
            (first.binding.clone(), uri)
        };
        let key = match &uri {
            Some(uri) => DataKey::Uri(uri.clone()),
            None => DataKey::Binding(binding.clone()),
        };

        let id = match data.get(&key) {
            Some(id) => *id,
            None => {
                let id = DataId::new(self.model.data.len());
                self.model.data.push(Data {
                    id,
                    scope,
                    name: binding,
                    uri,
                    ports: Vec::new(),
                });
                self.model.programs[scope.index()].data.push(id);
                data.insert(key, id);
                id
            }
        };

        let ports = &mut self.model.data[id.index()].ports;
        for port in [a, b] {
            if !ports.contains(&port) {
                ports.push(port);
            }
        }
        id
    }
}
