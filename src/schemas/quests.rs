//! Quests, dialogue, AI packages, idles, combat styles and cameras.

use crate::field::FieldType::*;
use crate::schema::SchemaRegistry;
use crate::signature::sig;

use super::*;

pub(super) fn register(reg: &mut SchemaRegistry) {
    quests(reg);
    dialogue(reg);
    packages(reg);
    idles(reg);
    combat_styles(reg);
    challenges_and_cameras(reg);
}

fn quests(reg: &mut SchemaRegistry) {
    let qust = sig("QUST");
    reg.register(
        key("DATA").in_record(qust).with_len(8),
        fixed(vec![f("Flags", UInt8), f("Priority", UInt8), pad(2), f("QuestDelay", Float)]),
    );
    reg.register(
        key("DATA").in_record(qust).with_len(2),
        fixed(vec![f("Flags", UInt8), f("Priority", UInt8)]),
    );
    reg.register(key("INDX").in_record(qust), single("StageIndex", Int16));
    reg.register(key("QSDT").in_record(qust), single("StageFlags", UInt8));
    reg.register(key("CNAM").in_record(qust), single("LogEntry", String));
    reg.register(key("NAM0").in_record(qust), form_id("NextQuest"));
    reg.register(key("QOBJ").in_record(qust), single("ObjectiveIndex", Int32));
    reg.register(key("NNAM").in_record(qust), single("ObjectiveText", String));
    reg.register(
        key("QSTA").in_record(qust),
        fixed(vec![f("Target", FormId), f("Flags", UInt8), pad(3)]),
    );
}

fn dialogue(reg: &mut SchemaRegistry) {
    reg.register(key("QSTI"), form_id("Quest"));
    reg.register(key("QSTR"), form_id("RemovedQuest"));

    let dial = sig("DIAL");
    reg.register(key("INFC").in_record(dial), form_id("InfoConnection"));
    reg.register(key("INFX").in_record(dial), single("Index", Int32));
    reg.register(
        key("DATA").in_record(dial),
        variable(vec![f("Type", UInt8), f("Flags", UInt8)]),
    );
    reg.register(key("PNAM").in_record(dial), single("Priority", Float));

    let info = sig("INFO");
    reg.register(
        key("DATA").in_record(info),
        variable(vec![
            f("Type", UInt8),
            f("NextSpeaker", UInt8),
            f("Flags1", UInt8),
            f("Flags2", UInt8),
        ]),
    );
    reg.register(
        key("TRDT").in_record(info),
        fixed(vec![
            f("EmotionType", UInt32),
            f("EmotionValue", Int32),
            pad(4),
            f("ResponseNumber", UInt8),
            pad(3),
            f("Sound", FormId),
            f("UseEmotionAnimation", UInt8),
            pad(3),
        ]),
    );
    reg.register(key("NAM1").in_record(info), single("ResponseText", String));
    reg.register(key("NAM2").in_record(info), single("ScriptNotes", String));
    reg.register(key("NAM3").in_record(info), single("Edits", String));
    reg.register(key("RNAM").in_record(info), single("Prompt", String));
    for formids in ["TPIC", "SNAM", "LNAM", "TCLT", "TCLF", "TCFU", "ANAM", "KNAM", "PNAM"] {
        reg.register(key(formids).in_record(info), form_id("Reference"));
    }
    reg.register(key("DNAM").in_record(info), single("SpeechChallenge", UInt32));
}

fn packages(reg: &mut SchemaRegistry) {
    let pack = sig("PACK");
    // The 12-byte form is handled before lookup.
    reg.register(
        key("PKDT").in_record(pack),
        variable(vec![
            f("GeneralFlags", UInt32),
            f("Type", UInt8),
            pad(1),
            f("FalloutBehaviorFlags", UInt16),
            f("TypeSpecificFlags", UInt16),
            pad(2),
        ]),
    );
    let location = fixed(vec![f("Type", Int32), f("Location", FormId), f("Radius", Int32)]);
    reg.register(key("PLDT").in_record(pack), location.clone());
    reg.register(key("PLD2").in_record(pack), location);
    reg.register(
        key("PSDT").in_record(pack),
        fixed(vec![
            f("Month", Int8),
            f("DayOfWeek", Int8),
            f("Date", UInt8),
            f("Time", Int8),
            f("Duration", Int32),
        ]),
    );
    let target = variable(vec![
        f("Type", Int32),
        f("Target", FormId),
        f("CountOrDistance", Int32),
        f("Unknown", Float),
    ]);
    reg.register(key("PTDT").in_record(pack), target.clone());
    reg.register(key("PTD2").in_record(pack), target);
    reg.register(
        key("PKDD").in_record(pack),
        variable(vec![
            f("FleeDistance", Float),
            f("Unknown", Int32),
            f("DialogueTopic", FormId),
            f("Flags", UInt32),
            pad(4),
            f("DialogueType", UInt32),
            sized("Unknown2", ByteArray, 4),
        ]),
    );
    reg.register(
        key("PKPT").in_record(pack),
        variable(vec![f("Repeatable", UInt8), pad(1)]),
    );
    reg.register(key("PKW3").in_record(pack), byte_array("UseWeapon"));
    reg.register(key("PKE2").in_record(pack), single("EscortDistance", UInt32));
    reg.register(key("PKFD").in_record(pack), single("FollowDistance", Float));
    reg.register(key("PKED").in_record(pack), single("EatMarker", UInt32));
    reg.register(key("PUID").in_record(pack), form_id("UseItem"));
    reg.register(key("CNAM").in_record(pack), form_id("CombatStyle"));
    reg.register(key("INAM").in_record(pack), form_id("Topic"));
    for markers in ["PKAM", "POBA", "POEA", "POCA", "PUMK"] {
        reg.register(key(markers).in_record(pack), marker());
    }

    // Idle collection shared by packages and idle markers.
    let idle_users = &["PACK", "IDLM"];
    register_in(reg, "IDLF", idle_users, single("Flags", UInt8));
    register_in(reg, "IDLC", idle_users, variable(vec![f("Count", UInt8), pad(3)]));
    register_in(reg, "IDLT", idle_users, single("IdleTimer", Float));
    register_in(reg, "IDLA", idle_users, form_id_array());
    register_in(reg, "IDLB", idle_users, byte_array("Unused"));
}

fn idles(reg: &mut SchemaRegistry) {
    let idle = sig("IDLE");
    reg.register(
        key("DATA").in_record(idle).with_len(6),
        fixed(vec![
            f("AnimationGroupSection", UInt8),
            f("LoopingMin", UInt8),
            f("LoopingMax", UInt8),
            pad(1),
            f("ReplayDelay", Int16),
        ]),
    );
    reg.register(
        key("DATA").in_record(idle),
        variable(vec![
            f("AnimationGroupSection", UInt8),
            f("LoopingMin", UInt8),
            f("LoopingMax", UInt8),
            pad(1),
            f("ReplayDelay", Int16),
            f("Flags", UInt8),
            pad(1),
        ]),
    );
    reg.register(
        key("ANAM").in_record(idle),
        fixed(vec![f("Parent", FormId), f("Previous", FormId)]),
    );
}

fn combat_styles(reg: &mut SchemaRegistry) {
    let csty = sig("CSTY");
    reg.register(
        key("CSTD").in_record(csty),
        variable(vec![
            f("DodgePercentChance", UInt8),
            f("LeftRightPercentChance", UInt8),
            pad(2),
            f("DodgeLeftRightTimerMin", Float),
            f("DodgeLeftRightTimerMax", Float),
            f("DodgeForwardTimerMin", Float),
            f("DodgeForwardTimerMax", Float),
            f("DodgeBackTimerMin", Float),
            f("DodgeBackTimerMax", Float),
            f("IdleTimerMin", Float),
            f("IdleTimerMax", Float),
            f("BlockPercentChance", UInt8),
            f("AttackPercentChance", UInt8),
            pad(2),
            f("RecoilStaggerBonusToAttack", Float),
            f("UnconsciousBonusToAttack", Float),
            f("HandToHandBonusToAttack", Float),
            f("PowerAttackPercentChance", UInt8),
            pad(3),
            f("RecoilStaggerBonusToPowerAttack", Float),
            f("UnconsciousBonusToPowerAttack", Float),
            f("PowerAttackNormal", UInt8),
            f("PowerAttackForward", UInt8),
            f("PowerAttackBack", UInt8),
            f("PowerAttackLeft", UInt8),
            f("PowerAttackRight", UInt8),
            pad(3),
            f("HoldTimerMin", Float),
            f("HoldTimerMax", Float),
            f("Flags", UInt16),
            pad(2),
            f("AcrobaticDodgePercentChance", UInt8),
            f("RushingAttackPercentChance", UInt8),
            pad(2),
            f("RushingAttackDistanceMultiplier", Float),
        ]),
    );
    reg.register(key("CSAD").in_record(csty), float_array());
    reg.register(
        key("CSSD").in_record(csty),
        variable(vec![
            f("CoverSearchRadius", Float),
            f("TakeCoverChance", Float),
            f("WaitTimerMin", Float),
            f("WaitTimerMax", Float),
            f("WaitToFireTimerMin", Float),
            f("WaitToFireTimerMax", Float),
            f("FireTimerMin", Float),
            f("FireTimerMax", Float),
            f("RangedWeaponRangeMultiplierMin", Float),
            pad(4),
            f("WeaponRestrictions", UInt32),
            f("RangedWeaponRangeMultiplierMax", Float),
            f("MaxTargetingFov", Float),
            f("CombatRadius", Float),
            f("SemiAutomaticFireDelayMultiplierMin", Float),
            f("SemiAutomaticFireDelayMultiplierMax", Float),
        ]),
    );
}

fn challenges_and_cameras(reg: &mut SchemaRegistry) {
    let chal = sig("CHAL");
    reg.register(
        key("DATA").in_record(chal),
        variable(vec![
            f("Type", UInt32),
            f("Threshold", UInt32),
            f("Flags", UInt32),
            f("Interval", UInt32),
            sized("Value1", ByteArray, 2),
            sized("Value2", ByteArray, 2),
            sized("Value3", ByteArray, 4),
        ]),
    );
    reg.register(key("SNAM").in_record(chal), form_id("Value3Reference"));
    reg.register(key("XNAM").in_record(chal), form_id("Value4Reference"));

    let cams = sig("CAMS");
    reg.register(
        key("DATA").in_record(cams),
        fixed(vec![
            f("Action", UInt32),
            f("Location", UInt32),
            f("Target", UInt32),
            f("Flags", UInt32),
            f("PlayerTimeMultiplier", Float),
            f("TargetTimeMultiplier", Float),
            f("GlobalTimeMultiplier", Float),
            f("MaxTime", Float),
            f("MinTime", Float),
            f("TargetPercentBetweenActors", Float),
        ]),
    );
    reg.register(key("MNAM").in_record(cams), form_id("ImageSpaceModifier"));

    let cpth = sig("CPTH");
    reg.register(key("DATA").in_record(cpth), single("CameraZoom", UInt8));
    reg.register(key("ANAM").in_record(cpth), fixed(vec![f("Parent", FormId), f("Previous", FormId)]));
    reg.register(key("SNAM").in_record(cpth), form_id_array());
}
