//! Magic effects, spells, enchantments, perks and radiation stages.

use crate::field::FieldType::*;
use crate::schema::SchemaRegistry;
use crate::signature::sig;

use super::*;

pub(super) fn register(reg: &mut SchemaRegistry) {
    effects(reg);
    spells(reg);
    perks(reg);
}

fn effects(reg: &mut SchemaRegistry) {
    let mgef = sig("MGEF");
    reg.register(
        key("DATA").in_record(mgef),
        fixed(vec![
            f("Flags", UInt32),
            f("BaseCost", Float),
            f("AssociatedItem", FormId),
            f("MagicSchool", Int32),
            f("ResistanceType", Int32),
            f("CounterEffectCount", UInt16),
            pad(2),
            f("Light", FormId),
            f("ProjectileSpeed", Float),
            f("EffectShader", FormId),
            f("ObjectDisplayShader", FormId),
            f("EffectSound", FormId),
            f("BoltSound", FormId),
            f("HitSound", FormId),
            f("AreaSound", FormId),
            f("ConstantEffectEnchantmentFactor", Float),
            f("ConstantEffectBarterFactor", Float),
            f("Archetype", UInt32),
            f("ActorValue", Int32),
        ]),
    );
    reg.register(key("ESCE").in_record(mgef), form_id_array());

    let rads = sig("RADS");
    reg.register(
        key("DATA").in_record(rads),
        fixed(vec![f("TriggerThreshold", Int32), f("ActorEffect", FormId)]),
    );
}

fn spells(reg: &mut SchemaRegistry) {
    reg.register(
        key("SPIT").in_record(sig("SPEL")),
        fixed(vec![
            f("Type", UInt32),
            f("Cost", UInt32),
            f("Level", UInt32),
            f("Flags", UInt8),
            pad(3),
        ]),
    );
    reg.register(
        key("ENIT").in_record(sig("ENCH")),
        fixed(vec![
            f("Type", UInt32),
            pad(4),
            pad(4),
            f("Flags", UInt8),
            pad(3),
        ]),
    );
}

fn perks(reg: &mut SchemaRegistry) {
    let perk = sig("PERK");
    reg.register(
        key("DATA").in_record(perk).with_len(5),
        fixed(vec![
            f("Trait", UInt8),
            f("MinLevel", UInt8),
            f("Ranks", UInt8),
            f("Playable", UInt8),
            f("Hidden", UInt8),
        ]),
    );
    reg.register(
        key("DATA").in_record(perk).with_len(4),
        fixed(vec![
            f("Trait", UInt8),
            f("MinLevel", UInt8),
            f("Ranks", UInt8),
            f("Playable", UInt8),
        ]),
    );
    // Effect DATA: quest + stage, ability, or entry point; only the leading word is numeric.
    reg.register(
        key("DATA").in_record(perk).with_len(8),
        fixed(vec![f("Reference", FormId), sized("Unknown", ByteArray, 4)]),
    );
    reg.register(
        key("DATA").in_record(perk).with_len(3),
        fixed(vec![f("EntryPoint", UInt8), f("Function", UInt8), f("ConditionCount", UInt8)]),
    );
    reg.register(key("DATA").in_record(perk), byte_array("Data"));
    reg.register(
        key("PRKE").in_record(perk),
        fixed(vec![f("Type", UInt8), f("Rank", UInt8), f("Priority", UInt8)]),
    );
    reg.register(key("PRKC").in_record(perk), single("RunOn", Int8));
    reg.register(key("EPFT").in_record(perk), single("Type", UInt8));
    reg.register(key("EPFD").in_record(perk).with_len(4), single("Value", Float));
    reg.register(key("EPFD").in_record(perk).with_len(8), fixed(vec![f("Value1", Float), f("Value2", Float)]));
    reg.register(key("EPFD").in_record(perk), byte_array("Data"));
    reg.register(key("EPF3").in_record(perk), single("ScriptFlags", UInt16));
    reg.register(key("PRKF").in_record(perk), marker());
}
