//! Inventory and usable objects.

use crate::field::FieldType::*;
use crate::schema::SchemaRegistry;
use crate::signature::sig;

use super::*;

pub(super) fn register(reg: &mut SchemaRegistry) {
    weapons(reg);
    apparel(reg);
    ammo(reg);
    consumables(reg);
    misc_items(reg);
    containers_and_lights(reg);
    terminals(reg);
    crafting(reg);
}

fn weapons(reg: &mut SchemaRegistry) {
    let weap = sig("WEAP");
    reg.register(
        key("DATA").in_record(weap),
        fixed(vec![
            f("Value", Int32),
            f("Health", Int32),
            f("Weight", Float),
            f("BaseDamage", Int16),
            f("ClipSize", UInt8),
        ]),
    );
    // The long form adds mod slots and skill requirements; shorter captures stop early.
    reg.register(
        key("DNAM").in_record(weap),
        variable(vec![
            f("AnimationType", UInt32),
            f("AnimationMultiplier", Float),
            f("Reach", Float),
            f("Flags1", UInt8),
            f("GripAnimation", UInt8),
            f("AmmoUse", UInt8),
            f("ReloadAnimation", UInt8),
            f("MinSpread", Float),
            f("Spread", Float),
            f("Unknown1", Float),
            f("SightFov", Float),
            f("Unknown2", Float),
            f("Projectile", FormId),
            f("BaseVatsToHitChance", UInt8),
            f("AttackAnimation", UInt8),
            f("ProjectileCount", UInt8),
            f("EmbeddedWeaponActorValue", UInt8),
            f("MinRange", Float),
            f("MaxRange", Float),
            f("OnHit", UInt32),
            f("Flags2", UInt32),
            f("AnimationAttackMultiplier", Float),
            f("FireRate", Float),
            f("OverrideActionPoints", Float),
            f("RumbleLeftMotor", Float),
            f("RumbleRightMotor", Float),
            f("RumbleDuration", Float),
            f("OverrideDamageToWeaponMult", Float),
            f("AttackShotsPerSecond", Float),
            f("ReloadTime", Float),
            f("JamTime", Float),
            f("AimArc", Float),
            f("Skill", Int32),
            f("RumblePattern", UInt32),
            f("RumbleWavelength", Float),
            f("LimbDamageMultiplier", Float),
            f("ResistType", Int32),
            f("SightUsage", Float),
            f("SemiAutoFireDelayMin", Float),
            f("SemiAutoFireDelayMax", Float),
            f("Unknown3", Float),
            f("EffectMod1", UInt32),
            f("EffectMod2", UInt32),
            f("EffectMod3", UInt32),
            f("ValueAMod1", Float),
            f("ValueAMod2", Float),
            f("ValueAMod3", Float),
            f("PowerAttackAnimationOverride", UInt32),
            f("StrengthRequirement", UInt32),
            f("Unknown4", UInt8),
            f("ReloadAnimationMod", UInt8),
            pad(2),
            f("RegenRate", Float),
            f("KillImpulse", Float),
            f("ValueBMod1", Float),
            f("ValueBMod2", Float),
            f("ValueBMod3", Float),
            f("ImpulseDistance", Float),
            f("SkillRequirement", UInt32),
        ]),
    );
    reg.register(
        key("CRDT").in_record(weap),
        fixed(vec![
            f("CriticalDamage", UInt16),
            pad(2),
            f("CriticalPercentMultiplier", Float),
            f("Flags", UInt8),
            pad(3),
            f("Effect", FormId),
        ]),
    );
    reg.register(
        key("VATS").in_record(weap),
        fixed(vec![
            f("Effect", FormId),
            f("Skill", Float),
            f("DamageMultiplier", Float),
            f("ActionPoints", Float),
            f("Silent", UInt8),
            f("ModRequired", UInt8),
            pad(2),
        ]),
    );
    for formids in [
        "NAM0", "NAM6", "NAM7", "NAM8", "NAM9", "INAM", "WNAM", "SNAM", "XNAM", "TNAM", "UNAM",
        "NAM5", "ANAM", "CNAM", "WMI1", "WMI2", "WMI3", "WMS1", "WMS2",
    ] {
        reg.register(key(formids).in_record(weap), form_id("Reference"));
    }
    reg.register(key("MWD1").in_record(weap), byte_array("ModelWithMods"));
    reg.register(key("EAMT").in_record(weap), single("EnchantmentAmount", Int16));
    reg.register(key("VNAM").in_record(weap), single("SoundLevel", UInt32));
}

fn apparel(reg: &mut SchemaRegistry) {
    let biped = fixed(vec![f("BipedFlags", UInt32), f("GeneralFlags", UInt8), pad(3)]);
    let data = fixed(vec![f("Value", Int32), f("Health", Int32), f("Weight", Float)]);
    for rt in ["ARMO", "ARMA"] {
        let rt = sig(rt);
        reg.register(key("BMDT").in_record(rt), biped.clone());
        reg.register(key("DATA").in_record(rt), data.clone());
        reg.register(
            key("DNAM").in_record(rt).with_len(12),
            fixed(vec![
                f("ArmorRating", Int16),
                f("Flags", UInt16),
                f("DamageThreshold", Float),
                pad(4),
            ]),
        );
        reg.register(
            key("DNAM").in_record(rt).with_len(4),
            fixed(vec![f("ArmorRating", Int16), f("Flags", UInt16)]),
        );
        reg.register(key("BNAM").in_record(rt), single("OverridesAnimationSounds", UInt32));
        reg.register(
            key("SNAM").in_record(rt),
            fixed(vec![f("Sound", FormId), f("Chance", UInt8), pad(3), f("Type", UInt32)]),
        );
        reg.register(key("TNAM").in_record(rt), form_id("AnimationSoundsTemplate"));
    }
}

fn ammo(reg: &mut SchemaRegistry) {
    let ammo = sig("AMMO");
    reg.register(
        key("DATA").in_record(ammo),
        fixed(vec![
            f("Speed", Float),
            f("Flags", UInt8),
            pad(3),
            f("Value", Int32),
            f("ClipRounds", UInt8),
        ]),
    );
    reg.register(
        key("DAT2").in_record(ammo),
        fixed(vec![
            f("ProjectilesPerShot", UInt32),
            f("Projectile", FormId),
            f("Weight", Float),
            f("ConsumedAmmo", FormId),
            f("ConsumedPercentage", Float),
        ]),
    );
    reg.register(key("ONAM").in_record(ammo), single("ShortName", String));
    reg.register(key("QNAM").in_record(ammo), single("Abbreviation", String));
    reg.register(key("RCIL").in_record(ammo), form_id("AmmoEffect"));
}

fn consumables(reg: &mut SchemaRegistry) {
    let alch = sig("ALCH");
    reg.register(key("DATA").in_record(alch), single("Weight", Float));
    reg.register(
        key("ENIT").in_record(alch),
        fixed(vec![
            f("Value", Int32),
            f("Flags", UInt8),
            pad(3),
            f("WithdrawalEffect", FormId),
            f("AddictionChance", Float),
            f("ConsumeSound", FormId),
        ]),
    );
    reg.register(key("EFID"), form_id("BaseEffect"));
    reg.register(
        key("EFIT"),
        fixed(vec![
            f("Magnitude", UInt32),
            f("Area", UInt32),
            f("Duration", UInt32),
            f("Type", UInt32),
            f("ActorValue", Int32),
        ]),
    );
}

fn misc_items(reg: &mut SchemaRegistry) {
    let value_weight = fixed(vec![f("Value", Int32), f("Weight", Float)]);
    register_in(reg, "DATA", &["MISC", "KEYM", "IMOD", "CCRD", "CMNY"], value_weight);

    reg.register(
        key("DATA").in_record(sig("BOOK")),
        fixed(vec![
            f("Flags", UInt8),
            f("Skill", Int8),
            f("Value", Int32),
            f("Weight", Float),
        ]),
    );

    let note = sig("NOTE");
    reg.register(key("DATA").in_record(note), single("Type", UInt8));
    reg.register(key("ONAM").in_record(note), form_id("Quest"));
    reg.register(key("XNAM").in_record(note), single("Texture", String));
    reg.register(key("SNAM").in_record(note), form_id("Sound"));
    // A 4-byte TNAM is a topic; any other length is note text.
    reg.register(key("TNAM").in_record(note).with_len(4), form_id("Topic"));
    reg.register(key("TNAM").in_record(note), single("Text", String));

    let chip = sig("CHIP");
    reg.register(key("DATA").in_record(chip), single("Value", Int32));
    reg.register(key("DATA").in_record(sig("REPU")), single("Value", Float));
}

fn containers_and_lights(reg: &mut SchemaRegistry) {
    let cont = sig("CONT");
    reg.register(
        key("DATA").in_record(cont),
        fixed(vec![f("Flags", UInt8), f("Weight", Float)]),
    );
    for formids in ["SNAM", "QNAM", "RNAM"] {
        reg.register(key(formids).in_record(cont), form_id("Sound"));
    }

    let ligh = sig("LIGH");
    reg.register(
        key("DATA").in_record(ligh),
        fixed(vec![
            f("Time", Int32),
            f("Radius", UInt32),
            f("Color", ColorRgba),
            f("Flags", UInt32),
            f("FalloffExponent", Float),
            f("Fov", Float),
            f("Value", Int32),
            f("Weight", Float),
        ]),
    );
    reg.register(key("FNAM").in_record(ligh), single("FadeValue", Float));
    reg.register(key("SNAM").in_record(ligh), form_id("Sound"));

    let door = sig("DOOR");
    reg.register(key("FNAM").in_record(door), single("Flags", UInt8));
    for formids in ["SNAM", "ANAM", "BNAM"] {
        reg.register(key(formids).in_record(door), form_id("Sound"));
    }

    reg.register(key("MNAM").in_record(sig("FURN")), single("MarkerFlags", UInt32));
    reg.register(key("DATA").in_record(sig("MSTT")), single("Flags", UInt8));
    let acti = sig("ACTI");
    for formids in ["SNAM", "VNAM", "INAM", "RNAM", "WNAM"] {
        reg.register(key(formids).in_record(acti), form_id("Reference"));
    }
    let tact = sig("TACT");
    for formids in ["SNAM", "VNAM", "INAM"] {
        reg.register(key(formids).in_record(tact), form_id("Reference"));
    }
}

fn terminals(reg: &mut SchemaRegistry) {
    let term = sig("TERM");
    reg.register(
        key("DNAM").in_record(term),
        fixed(vec![
            f("BaseHackingDifficulty", UInt8),
            f("Flags", UInt8),
            f("ServerType", UInt8),
            pad(1),
        ]),
    );
    reg.register(key("RNAM").in_record(term), single("ResultText", String));
    reg.register(key("ANAM").in_record(term), single("MenuItemFlags", UInt8));
    reg.register(key("INAM").in_record(term), form_id("DisplayNote"));
    reg.register(key("TNAM").in_record(term), form_id("SubMenu"));
    reg.register(key("PNAM").in_record(term), form_id("PasswordNote"));
    reg.register(key("SNAM").in_record(term), form_id("Sound"));

    let mesg = sig("MESG");
    reg.register(key("DNAM").in_record(mesg), single("Flags", UInt32));
    reg.register(key("TNAM").in_record(mesg), single("DisplayTime", UInt32));
    reg.register(key("INAM").in_record(mesg), form_id("Icon"));
    reg.register(key("QNAM").in_record(mesg), form_id("Owner"));
}

fn crafting(reg: &mut SchemaRegistry) {
    let rcpe = sig("RCPE");
    reg.register(
        key("DATA").in_record(rcpe),
        fixed(vec![
            f("Skill", Int32),
            f("Level", UInt32),
            f("Category", FormId),
            f("SubCategory", FormId),
        ]),
    );
    let component = fixed(vec![f("Item", FormId), f("Count", UInt32)]);
    reg.register(key("RCIL").in_record(rcpe), form_id("Ingredient"));
    reg.register(key("RCQY").in_record(rcpe), single("Quantity", UInt32));
    reg.register(key("RCOD").in_record(rcpe), form_id("Output"));
    reg.register(key("DATA").in_record(sig("COBJ")), fixed(vec![f("Value", Int32), f("Weight", Float)]));
    reg.register(key("RCOD").with_len(8), component);
}
