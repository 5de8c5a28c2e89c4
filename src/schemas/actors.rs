//! Actors, their races, classes, factions and leveled lists.

use crate::field::FieldType::*;
use crate::schema::SchemaRegistry;
use crate::signature::sig;

use super::*;

pub(super) fn register(reg: &mut SchemaRegistry) {
    actor_base(reg);
    npcs(reg);
    creatures(reg);
    races(reg);
    classes_and_factions(reg);
    leveled_lists(reg);
    body_parts(reg);
}

/// Subrecords shared by `NPC_` and `CREA`.
fn actor_base(reg: &mut SchemaRegistry) {
    let actors = &["NPC_", "CREA"];
    register_in(
        reg,
        "ACBS",
        actors,
        fixed(vec![
            f("Flags", UInt32),
            f("Fatigue", UInt16),
            f("BarterGold", UInt16),
            f("Level", Int16),
            f("CalcMin", UInt16),
            f("CalcMax", UInt16),
            f("SpeedMultiplier", UInt16),
            f("Karma", Float),
            f("DispositionBase", Int16),
            f("TemplateFlags", UInt16),
        ]),
    );
    register_in(
        reg,
        "SNAM",
        actors,
        fixed(vec![f("Faction", FormId), f("Rank", UInt8), pad(3)]),
    );
    register_in(
        reg,
        "AIDT",
        actors,
        fixed(vec![
            f("Aggression", UInt8),
            f("Confidence", UInt8),
            f("EnergyLevel", UInt8),
            f("Responsibility", UInt8),
            f("Mood", UInt8),
            pad(3),
            f("Services", UInt32),
            f("TeachesSkill", Int8),
            f("MaxTrainingLevel", UInt8),
            f("Assistance", Int8),
            f("AggroRadiusBehavior", UInt8),
            f("AggroRadius", Int32),
        ]),
    );
    for formids in ["INAM", "VTCK", "TPLT", "SPLO", "PKID", "ZNAM", "CSCR"] {
        register_in(reg, formids, actors, form_id("Reference"));
    }
    register_in(reg, "EAMT", actors, single("EnchantmentAmount", UInt16));
    register_in(reg, "NAM4", actors, single("ImpactMaterial", UInt32));
    register_in(reg, "NAM5", actors, single("SoundLevel", UInt32));
    register_in(reg, "CSDT", actors, single("SoundType", UInt32));
    register_in(reg, "CSDI", actors, form_id("Sound"));
    register_in(reg, "CSDC", actors, single("Chance", UInt8));
}

fn npcs(reg: &mut SchemaRegistry) {
    let npc = sig("NPC_");
    reg.register(
        key("DATA").in_record(npc),
        variable(vec![
            f("BaseHealth", Int32),
            f("Strength", UInt8),
            f("Perception", UInt8),
            f("Endurance", UInt8),
            f("Charisma", UInt8),
            f("Intelligence", UInt8),
            f("Agility", UInt8),
            f("Luck", UInt8),
            f("Unused", ByteArray),
        ]),
    );
    reg.register(
        key("DNAM").in_record(npc),
        fixed(vec![sized("SkillValues", ByteArray, 14), sized("SkillOffsets", ByteArray, 14)]),
    );
    for formids in ["RNAM", "CNAM", "PNAM", "HNAM", "ENAM"] {
        reg.register(key(formids).in_record(npc), form_id("Reference"));
    }
    reg.register(key("LNAM").in_record(npc), single("HairLength", Float));
    reg.register(key("HCLR").in_record(npc), single("HairColor", ColorRgba));
    reg.register(key("NAM6").in_record(npc), single("Height", Float));
    reg.register(key("NAM7").in_record(npc), single("Weight", Float));
    // FaceGen morph coefficients.
    for facegen in ["FGGS", "FGGA", "FGTS"] {
        reg.register(key(facegen), float_array());
    }
}

fn creatures(reg: &mut SchemaRegistry) {
    let crea = sig("CREA");
    reg.register(
        key("DATA").in_record(crea),
        fixed(vec![
            f("Type", UInt8),
            f("CombatSkill", UInt8),
            f("MagicSkill", UInt8),
            f("StealthSkill", UInt8),
            f("Health", Int16),
            pad(2),
            f("Damage", Int16),
            f("Strength", UInt8),
            f("Perception", UInt8),
            f("Endurance", UInt8),
            f("Charisma", UInt8),
            f("Intelligence", UInt8),
            f("Agility", UInt8),
            f("Luck", UInt8),
        ]),
    );
    reg.register(key("RNAM").in_record(crea), single("AttackReach", UInt8));
    reg.register(key("TNAM").in_record(crea), single("TurningSpeed", Float));
    reg.register(key("BNAM").in_record(crea), single("BaseScale", Float));
    reg.register(key("WNAM").in_record(crea), single("FootWeight", Float));
    reg.register(key("CNAM").in_record(crea), form_id("CombatStyle"));
    reg.register(key("LNAM").in_record(crea), form_id("MeleeWeaponList"));
    reg.register(key("PNAM").in_record(crea), form_id("BodyPartData"));
    reg.register(key("NIFZ").in_record(crea), byte_array("ModelList"));
    reg.register(key("NIFT").in_record(crea), byte_array("TextureHashes"));
    reg.register(key("KFFZ").in_record(crea), byte_array("AnimationList"));
}

fn races(reg: &mut SchemaRegistry) {
    let race = sig("RACE");
    let mut data = Vec::new();
    for (skill, boost) in [
        ("Skill1", "Boost1"),
        ("Skill2", "Boost2"),
        ("Skill3", "Boost3"),
        ("Skill4", "Boost4"),
        ("Skill5", "Boost5"),
        ("Skill6", "Boost6"),
        ("Skill7", "Boost7"),
    ] {
        data.push(f(skill, Int8));
        data.push(f(boost, Int8));
    }
    data.extend([
        pad(2),
        f("MaleHeight", Float),
        f("FemaleHeight", Float),
        f("MaleWeight", Float),
        f("FemaleWeight", Float),
        f("Flags", UInt32),
    ]);
    reg.register(key("DATA").in_record(race), fixed(data));
    reg.register(key("XNAM").in_record(race), fixed(vec![f("Race", FormId), f("Modifier", Int32), f("CombatReaction", UInt32)]));
    reg.register(key("ONAM").in_record(race), form_id("OlderRace"));
    reg.register(key("YNAM").in_record(race), form_id("YoungerRace"));
    reg.register(key("DNAM").in_record(race), fixed(vec![f("MaleHair", FormId), f("FemaleHair", FormId)]));
    reg.register(key("CNAM").in_record(race), fixed(vec![f("MaleHairColor", UInt8), f("FemaleHairColor", UInt8)]));
    reg.register(key("PNAM").in_record(race), single("FaceGenMainClamp", Float));
    reg.register(key("UNAM").in_record(race), single("FaceGenFaceClamp", Float));
    reg.register(key("ATTR").in_record(race), byte_array("Attributes"));
    reg.register(key("VTCK").in_record(race), fixed(vec![f("MaleVoice", FormId), f("FemaleVoice", FormId)]));
    reg.register(key("HNAM").in_record(race), form_id_array());
    reg.register(key("ENAM").in_record(race), form_id_array());
    reg.register(key("INDX").in_record(race), single("Index", UInt32));
    reg.register(key("SNAM").in_record(race), byte_array("Unknown"));
    for markers in ["NAM0", "NAM1", "NAM2", "MNAM", "FNAM"] {
        reg.register(key(markers).in_record(race), marker());
    }

    reg.register(key("DATA").in_record(sig("EYES")), single("Flags", UInt8));
    reg.register(key("DATA").in_record(sig("HAIR")), single("Flags", UInt8));
    let hdpt = sig("HDPT");
    reg.register(key("DATA").in_record(hdpt), single("Flags", UInt8));
    reg.register(key("HNAM").in_record(hdpt), form_id("ExtraPart"));
    reg.register(key("DNAM").in_record(sig("VTYP")), single("Flags", UInt8));
}

fn classes_and_factions(reg: &mut SchemaRegistry) {
    let clas = sig("CLAS");
    reg.register(
        key("DATA").in_record(clas),
        fixed(vec![
            f("TagSkill1", Int32),
            f("TagSkill2", Int32),
            f("TagSkill3", Int32),
            f("TagSkill4", Int32),
            f("Flags", UInt32),
            f("Services", UInt32),
            f("TeachesSkill", Int8),
            f("MaxTrainingLevel", UInt8),
            pad(2),
        ]),
    );
    reg.register(key("ATTR").in_record(clas), fixed(vec![sized("Attributes", ByteArray, 7)]));

    let fact = sig("FACT");
    reg.register(
        key("DATA").in_record(fact).with_len(4),
        fixed(vec![f("Flags1", UInt8), f("Flags2", UInt8), pad(2)]),
    );
    reg.register(
        key("DATA").in_record(fact),
        variable(vec![f("Flags1", UInt8), f("Flags2", UInt8)]),
    );
    reg.register(
        key("XNAM").in_record(fact),
        fixed(vec![f("Faction", FormId), f("Modifier", Int32), f("CombatReaction", UInt32)]),
    );
    reg.register(key("CNAM").in_record(fact), single("CrimeGoldMultiplier", Float));
    reg.register(key("RNAM").in_record(fact), single("RankNumber", Int32));
    reg.register(key("MNAM").in_record(fact), single("MaleRankTitle", String));
    reg.register(key("FNAM").in_record(fact), single("FemaleRankTitle", String));
    reg.register(key("INAM").in_record(fact), single("Insignia", String));
    reg.register(key("WMI1").in_record(fact), form_id("Reputation"));
}

fn leveled_lists(reg: &mut SchemaRegistry) {
    let lists = &["LVLN", "LVLC", "LVLI"];
    register_in(reg, "LVLD", lists, single("ChanceNone", UInt8));
    register_in(reg, "LVLF", lists, single("Flags", UInt8));
    register_in(reg, "LVLG", lists, form_id("Global"));
    register_in(
        reg,
        "LVLO",
        lists,
        fixed(vec![
            f("Level", Int16),
            pad(2),
            f("Reference", FormId),
            f("Count", Int16),
            pad(2),
        ]),
    );
}

fn body_parts(reg: &mut SchemaRegistry) {
    let bptd = sig("BPTD");
    reg.register(
        key("BPND").in_record(bptd),
        fixed(vec![
            f("DamageMultiplier", Float),
            f("Flags", UInt8),
            f("PartType", UInt8),
            f("HealthPercent", UInt8),
            f("ActorValue", Int8),
            f("ToHitChance", UInt8),
            f("ExplodableChance", UInt8),
            f("ExplodableDebrisCount", UInt16),
            f("ExplodableDebris", FormId),
            f("ExplodableExplosion", FormId),
            f("TrackingMaxAngle", Float),
            f("ExplodableDebrisScale", Float),
            f("SeverableDebrisCount", Int32),
            f("SeverableDebris", FormId),
            f("SeverableExplosion", FormId),
            f("SeverableDebrisScale", Float),
            f("GoreEffectPositioning", PosRot),
            f("SeverableImpactDataSet", FormId),
            f("ExplodableImpactDataSet", FormId),
            f("SeverableDecalCount", UInt8),
            f("ExplodableDecalCount", UInt8),
            pad(2),
            f("LimbReplacementScale", Float),
        ]),
    );
    reg.register(key("RAGA").in_record(bptd), form_id("Ragdoll"));
    reg.register(key("NAM1").in_record(bptd), single("LimbReplacementModel", String));
    reg.register(key("NAM4").in_record(bptd), single("GoreEffectsTargetBone", String));
    reg.register(key("NAM5").in_record(bptd), byte_array("TextureHashes"));
}
