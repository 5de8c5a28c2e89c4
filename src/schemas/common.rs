//! Plugin header and subrecords shared across many record types: names, models,
//! bounds, destruction, conditions, scripts and placed-reference extra data.

use crate::field::FieldType::*;
use crate::schema::SchemaRegistry;
use crate::signature::sig;

use super::*;

/// Placed references: `NAME` base object, `DATA` position/rotation.
pub(crate) const PLACED_RECORDS: &[&str] =
    &["REFR", "ACHR", "ACRE", "PGRE", "PMIS", "PBEA", "PFLA", "PCBE", "PARW"];

pub(super) fn register(reg: &mut SchemaRegistry) {
    register_strings(
        reg,
        &[
            "EDID", "FULL", "MODL", "MOD2", "MOD3", "MOD4", "ICON", "MICO", "ICO2", "MIC2",
            "DESC", "SCTX", "SCVR", "DMDL", "MAST", "TX00", "TX01", "TX02", "TX03", "TX04",
            "TX05", "ITXT", "XATO", "BPTN", "BPNN", "BPNT", "BPNI", "EPF2", "TDUM", "RDMP",
        ],
    );

    header(reg);
    models(reg);
    destruction(reg);
    conditions(reg);
    scripts(reg);
    ownership(reg);
    placed_references(reg);
    globals(reg);
}

fn header(reg: &mut SchemaRegistry) {
    let tes4 = sig("TES4");
    reg.register(
        key("HEDR").in_record(tes4),
        fixed(vec![
            f("Version", Float),
            f("NumRecords", Int32),
            f("NextObjectId", UInt32),
        ]),
    );
    reg.register(key("DATA").in_record(tes4), single("FileSize", UInt64));
    reg.register(key("CNAM").in_record(tes4), single("Author", String));
    reg.register(key("SNAM").in_record(tes4), single("Description", String));
    reg.register(key("ONAM").in_record(tes4), form_id_array());
    reg.register(key("INTV").in_record(tes4), single("Unknown", UInt32));
    reg.register(key("INCC").in_record(tes4), single("Unknown", UInt32));
    reg.register(key("OFST").in_record(tes4), byte_array("Offsets"));
    reg.register(key("DELE").in_record(tes4), byte_array("Deleted"));
}

fn models(reg: &mut SchemaRegistry) {
    reg.register(
        key("OBND"),
        fixed(vec![
            f("X1", Int16),
            f("Y1", Int16),
            f("Z1", Int16),
            f("X2", Int16),
            f("Y2", Int16),
            f("Z2", Int16),
        ]),
    );
    reg.register(key("MODB"), single("BoundRadius", Float));
    for hashes in ["MODT", "MO2T", "MO3T", "MO4T", "DMDT"] {
        reg.register(key(hashes), byte_array("TextureHashes"));
    }
    // Alternate texture lists embed length-prefixed strings; kept verbatim.
    for alternates in ["MODS", "MO2S", "MO3S", "MO4S", "DMDS"] {
        reg.register(key(alternates), byte_array("AlternateTextures"));
    }
    reg.register(key("MODD"), single("FaceGenFlags", UInt8));
    reg.register(key("MOSD"), single("FaceGenFlags", UInt8));
    reg.register(key("YNAM"), form_id("PickupSound"));
    reg.register(key("ZNAM"), form_id("DropSound"));
    reg.register(key("ETYP"), single("EquipmentType", Int32));
    reg.register(key("EITM"), form_id("ObjectEffect"));
    reg.register(key("REPL"), form_id("RepairList"));
    reg.register(key("BIPL"), form_id("BipedModelList"));
}

fn destruction(reg: &mut SchemaRegistry) {
    reg.register(
        key("DEST"),
        fixed(vec![
            f("Health", Int32),
            f("Count", UInt8),
            f("Flags", UInt8),
            pad(2),
        ]),
    );
    reg.register(
        key("DSTD"),
        fixed(vec![
            f("HealthPercent", UInt8),
            f("Index", UInt8),
            f("DamageStage", UInt8),
            f("Flags", UInt8),
            f("SelfDamagePerSecond", Int32),
            f("Explosion", FormId),
            f("Debris", FormId),
            f("DebrisCount", Int32),
        ]),
    );
    reg.register(key("DSTF"), marker());
}

fn conditions(reg: &mut SchemaRegistry) {
    let ctda = |with_reference: bool| {
        let mut fields = vec![
            f("Type", UInt8),
            pad(3),
            f("ComparisonValue", Float),
            f("FunctionIndex", UInt32),
            f("Parameter1", UInt32),
            f("Parameter2", UInt32),
            f("RunOn", UInt32),
        ];
        if with_reference {
            fields.push(f("Reference", FormId));
        }
        fixed(fields)
    };
    reg.register(key("CTDA").with_len(28), ctda(true));
    reg.register(key("CTDA").with_len(24), ctda(false));
    reg.register(key("CTDA"), ctda(true));
    reg.register(
        key("CNTO"),
        fixed(vec![f("Item", FormId), f("Count", Int32)]),
    );
    reg.register(
        key("COED"),
        fixed(vec![
            f("Owner", FormId),
            f("GlobalOrRank", UInt32),
            f("ItemCondition", Float),
        ]),
    );
}

fn scripts(reg: &mut SchemaRegistry) {
    reg.register(
        key("SCHR"),
        fixed(vec![
            pad(4),
            f("RefCount", UInt32),
            f("CompiledSize", UInt32),
            f("VariableCount", UInt32),
            f("Type", UInt16),
            f("Flags", UInt16),
        ]),
    );
    // Compiled bytecode is emitted little-endian by the console compiler.
    reg.register(key("SCDA"), byte_array("CompiledScript"));
    reg.register(
        key("SLSD"),
        fixed(vec![
            f("Index", UInt32),
            pad(12),
            f("Flags", UInt8),
            pad(7),
        ]),
    );
    reg.register(key("SCRO"), form_id("Reference"));
    reg.register(key("SCRV"), single("LocalVariable", UInt32));
    reg.register(key("SCRI"), form_id("Script"));
    reg.register(key("NEXT"), marker());
}

fn ownership(reg: &mut SchemaRegistry) {
    reg.register(key("XOWN"), form_id("Owner"));
    reg.register(key("XRNK"), single("FactionRank", Int32));
    reg.register(key("XGLB"), form_id("Global"));
}

fn placed_references(reg: &mut SchemaRegistry) {
    register_in(reg, "NAME", PLACED_RECORDS, form_id("Base"));
    register_in(reg, "DATA", PLACED_RECORDS, single("Position", PosRot));
    reg.register(key("NAME"), form_id("Base"));

    reg.register(key("XSCL"), single("Scale", Float));
    reg.register(
        key("XESP"),
        fixed(vec![f("Parent", FormId), f("Flags", UInt32)]),
    );
    reg.register(
        key("XTEL"),
        fixed(vec![
            f("Door", FormId),
            f("Destination", PosRot),
            f("Flags", UInt32),
        ]),
    );
    reg.register(
        key("XLOC"),
        variable(vec![
            f("Level", UInt8),
            pad(3),
            f("Key", FormId),
            f("Flags", UInt8),
            pad(3),
            sized("Unknown", ByteArray, 8),
        ]),
    );
    reg.register(key("XLKR"), form_id("LinkedReference"));
    reg.register(key("XCNT"), single("Count", Int32));
    reg.register(key("XRDS"), single("Radius", Float));
    reg.register(key("XHLP"), single("Health", Float));
    reg.register(key("XRAD"), single("Radiation", Float));
    reg.register(key("XCHG"), single("Charge", Float));
    reg.register(key("XLCM"), single("LevelModifier", Int32));
    reg.register(key("XACT"), single("ActionFlags", UInt32));
    reg.register(
        key("XPRM"),
        fixed(vec![
            f("Bounds", Vec3),
            f("Red", Float),
            f("Green", Float),
            f("Blue", Float),
            f("Unknown", Float),
            f("Type", UInt32),
        ]),
    );
    reg.register(key("XMBO"), single("BoundHalfExtents", Vec3));
    reg.register(
        key("XNDP"),
        fixed(vec![f("NavMesh", FormId), f("Triangle", UInt16), pad(2)]),
    );
    reg.register(key("XEZN"), form_id("EncounterZone"));
    reg.register(
        key("XMRC"),
        fixed(vec![f("MerchantContainer", FormId), f("Unknown", FormId)]),
    );
    reg.register(key("XTRG"), form_id("Target"));
    reg.register(key("XAPD"), single("Flags", UInt8));
    reg.register(
        key("XAPR"),
        fixed(vec![f("Reference", FormId), f("Delay", Float)]),
    );
    reg.register(key("XEMI"), form_id("Emittance"));
    reg.register(key("XMSP"), form_id("MaterialSwap"));
    reg.register(key("XIBS"), marker());
    reg.register(key("XMRK"), marker());
    reg.register(key("XPPA"), marker());
    reg.register(key("XSED"), single("SpeedTreeSeed", UInt8));
    reg.register(
        key("XCLP"),
        fixed(vec![f("LinkStartColor", ColorRgba), f("LinkEndColor", ColorRgba)]),
    );
    reg.register(key("XLRM"), form_id("LinkedRoom"));
    reg.register(key("XLTW"), form_id("LitWater"));
    reg.register(key("XRTM"), form_id("RoomTransition"));
    reg.register(
        key("XORD"),
        fixed(vec![
            f("Right", FormId),
            f("Left", FormId),
            f("Bottom", FormId),
            f("Top", FormId),
        ]),
    );
    reg.register(
        key("XPOD"),
        fixed(vec![f("Room1", FormId), f("Room2", FormId)]),
    );
    reg.register(
        key("XRMR"),
        fixed(vec![f("LinkedRoomCount", UInt16), f("Flags", UInt16)]),
    );
    reg.register(key("XAMT"), form_id("AmmoType"));
    reg.register(key("XAMC"), single("AmmoCount", Int32));
    reg.register(
        key("XPWR"),
        fixed(vec![f("Reference", FormId), f("Type", UInt32)]),
    );
    reg.register(key("XTRI"), single("Collision", UInt32));
    reg.register(key("XSRD"), form_id("SoundReference"));
    reg.register(key("XSRF"), single("SoundFlags", UInt32));
    reg.register(key("XRGD"), byte_array("RagdollData"));
    reg.register(key("XRGB"), byte_array("RagdollBipedData"));
    reg.register(key("XLOD"), fixed(vec![f("X", Float), f("Y", Float), f("Z", Float)]));
    reg.register(key("XPRD"), single("IdleTime", Float));
    reg.register(key("XHTW"), form_id("HeadTrackingWeight"));
    reg.register(key("XOCP"), byte_array("OcclusionPlane"));
    reg.register(
        key("XDCR"),
        variable(vec![f("Reference", FormId), f("Unknown", ByteArray)]),
    );
    reg.register(
        key("PDTO"),
        fixed(vec![f("Type", UInt32), f("Data", FormId)]),
    );
}

fn globals(reg: &mut SchemaRegistry) {
    reg.register(key("FNAM").in_record(sig("GLOB")), single("Type", UInt8));
    reg.register(key("FLTV"), single("Value", Float));
    reg.register(key("LNAM").in_record(sig("FLST")), form_id("Entry"));
    reg.register(key("DATA").in_record(sig("DOBJ")), form_id_array());
    reg.register(key("DATA").in_record(sig("ANIO")), form_id("Animation"));
}
