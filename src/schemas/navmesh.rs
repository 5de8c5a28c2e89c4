//! Navigation meshes (`NAVM`) and the navmesh info map (`NAVI`).
//!
//! `NVTR`, `NVDP`, `NVMI`, `NVCI` and `NVGD` are converted by dedicated handlers
//! before lookup; the entries here describe their PC layout for the read path.

use crate::field::FieldType::*;
use crate::schema::SchemaRegistry;
use crate::signature::sig;

use super::*;

pub(super) fn register(reg: &mut SchemaRegistry) {
    let navm = sig("NAVM");
    let navi = sig("NAVI");

    reg.register(key("NVER").in_record(navm), single("Version", UInt32));
    reg.register(key("NVER").in_record(navi), single("Version", UInt32));
    reg.register(
        key("DATA").in_record(navm),
        fixed(vec![
            f("Cell", FormId),
            f("VertexCount", UInt32),
            f("TriangleCount", UInt32),
            f("ExternalConnectionCount", UInt32),
            f("CoverTriangleCount", UInt32),
            f("DoorCount", UInt32),
        ]),
    );
    reg.register(key("NVVX").in_record(navm), repeating(vec![f("Vertex", Vec3)]));
    // Console payloads carry the last two words in the opposite order.
    reg.register(
        key("NVTR").in_record(navm),
        repeating(vec![
            f("Vertex0", Int16),
            f("Vertex1", Int16),
            f("Vertex2", Int16),
            f("Edge01", Int16),
            f("Edge12", Int16),
            f("Edge20", Int16),
            f("Flags", UInt16),
            f("CoverFlags", UInt16),
        ]),
    );
    reg.register(key("NVCA").in_record(navm), repeating(vec![f("Triangle", UInt16)]));
    reg.register(
        key("NVDP").in_record(navm),
        repeating(vec![f("Door", FormId), f("Triangle", UInt16), pad(2)]),
    );
    reg.register(
        key("NVEX").in_record(navm),
        repeating(vec![f("Unknown", UInt32), f("NavMesh", FormId), f("Triangle", UInt16)]),
    );
}
