//! Sounds, acoustic spaces and music.

use crate::field::FieldType::*;
use crate::schema::SchemaRegistry;
use crate::signature::sig;

use super::*;

pub(super) fn register(reg: &mut SchemaRegistry) {
    let soun = sig("SOUN");
    reg.register(key("FNAM").in_record(soun), single("SoundFile", String));
    reg.register(key("RNAM").in_record(soun), single("RandomChance", UInt8));
    let sound_data = vec![
        f("MinimumAttenuationDistance", UInt8),
        f("MaximumAttenuationDistance", UInt8),
        f("FrequencyAdjustment", Int8),
        pad(1),
        f("Flags", UInt32),
        f("StaticAttenuation", Int16),
        f("StopTime", UInt8),
        f("StartTime", UInt8),
    ];
    let mut sndd = sound_data.clone();
    sndd.extend([
        f("AttenuationPoint1", Int16),
        f("AttenuationPoint2", Int16),
        f("AttenuationPoint3", Int16),
        f("AttenuationPoint4", Int16),
        f("AttenuationPoint5", Int16),
        f("ReverbAttenuation", Int16),
        f("Priority", Int32),
        f("LoopBegin", Int32),
        f("LoopEnd", Int32),
    ]);
    reg.register(key("SNDD").in_record(soun), fixed(sndd));
    reg.register(key("SNDX").in_record(soun), fixed(sound_data));
    reg.register(
        key("ANAM").in_record(soun),
        fixed(vec![
            f("AttenuationPoint1", Int16),
            f("AttenuationPoint2", Int16),
            f("AttenuationPoint3", Int16),
            f("AttenuationPoint4", Int16),
            f("AttenuationPoint5", Int16),
        ]),
    );
    reg.register(key("GNAM").in_record(soun), single("ReverbAttenuation", Int16));
    reg.register(key("HNAM").in_record(soun), single("Priority", Int32));

    let aspc = sig("ASPC");
    for formids in ["SNAM", "RDAT"] {
        reg.register(key(formids).in_record(aspc), form_id("Sound"));
    }
    reg.register(key("ANAM").in_record(aspc), single("EnvironmentType", UInt32));
    reg.register(key("INAM").in_record(aspc), single("IsInterior", UInt32));

    let musc = sig("MUSC");
    reg.register(key("FNAM").in_record(musc), single("Filename", String));
    reg.register(key("ANAM").in_record(musc), single("Decibels", Float));

    let mset = sig("MSET");
    reg.register(key("NAM1").in_record(mset), single("Type", UInt32));
    for layer in ["NAM2", "NAM3", "NAM4", "NAM5", "NAM6", "NAM7"] {
        reg.register(key(layer).in_record(mset), single("Filename", String));
    }
    reg.register(
        key("NAM8").in_record(mset),
        fixed(vec![f("Loop", Float)]),
    );
    for formids in ["HNAM", "INAM"] {
        reg.register(key(formids).in_record(mset), form_id("Sound"));
    }
}
