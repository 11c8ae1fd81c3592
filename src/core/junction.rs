//! Kreuzungen und ihre Verbindungen zwischen ein- und ausgehenden Straßen.

use indexmap::IndexMap;

use super::{ConnectionId, JunctionId, LaneId, RoadId};

/// Eine Verbindung innerhalb einer Kreuzung: einkommende Straße,
/// verbindende Straße und die Spur-Paare, die über sie führen.
///
/// Die Spur-Paare bleiben rohe Id-Paare; die Routenwahl über eine Kreuzung
/// trifft der Konsument, nicht der Builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JunctionConnection {
    pub id: ConnectionId,
    pub incoming_road: RoadId,
    pub connecting_road: RoadId,
    /// (von-Spur, nach-Spur) in Ankunftsreihenfolge, progressiv angehängt
    pub lane_links: Vec<(LaneId, LaneId)>,
}

impl JunctionConnection {
    pub fn new(id: ConnectionId, incoming_road: RoadId, connecting_road: RoadId) -> Self {
        Self {
            id,
            incoming_road,
            connecting_road,
            lane_links: Vec::new(),
        }
    }

    /// Hängt ein Spur-Paar an (ersetzt nie bestehende Paare).
    pub fn add_lane_link(&mut self, from: LaneId, to: LaneId) {
        self.lane_links.push((from, to));
    }
}

/// Eine Kreuzung mit ihren Verbindungen in Einfüge-Reihenfolge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Junction {
    pub id: JunctionId,
    pub name: String,
    connections: IndexMap<ConnectionId, JunctionConnection>,
}

impl Junction {
    pub fn new(id: JunctionId, name: String) -> Self {
        Self {
            id,
            name,
            connections: IndexMap::new(),
        }
    }

    /// Fügt eine Verbindung ein. Gibt `false` zurück falls die Id schon belegt ist.
    pub fn add_connection(&mut self, connection: JunctionConnection) -> bool {
        if self.connections.contains_key(&connection.id) {
            return false;
        }
        self.connections.insert(connection.id, connection);
        true
    }

    pub fn connection(&self, connection_id: ConnectionId) -> Option<&JunctionConnection> {
        self.connections.get(&connection_id)
    }

    pub fn connection_mut(
        &mut self,
        connection_id: ConnectionId,
    ) -> Option<&mut JunctionConnection> {
        self.connections.get_mut(&connection_id)
    }

    /// Iterator über alle Verbindungen in Einfüge-Reihenfolge
    pub fn connections(&self) -> impl Iterator<Item = &JunctionConnection> {
        self.connections.values()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}
