//! Cells, worldspaces, terrain and the environment records placed in them.

use crate::field::FieldType::*;
use crate::schema::SchemaRegistry;
use crate::signature::sig;

use super::*;

/// Lighting block shared by `CELL` (`XCLL`) and lighting templates (`LGTM`).
fn lighting() -> SubrecordSchema {
    variable(vec![
        f("AmbientColor", ColorRgba),
        f("DirectionalColor", ColorRgba),
        f("FogColor", ColorRgba),
        f("FogNear", Float),
        f("FogFar", Float),
        f("DirectionalRotationXY", Int32),
        f("DirectionalRotationZ", Int32),
        f("DirectionalFade", Float),
        f("FogClipDistance", Float),
        f("FogPower", Float),
    ])
}

pub(super) fn register(reg: &mut SchemaRegistry) {
    cells(reg);
    worldspaces(reg);
    terrain(reg);
    regions(reg);
    flora_and_water(reg);
    climate(reg);
    misc_world(reg);
}

fn cells(reg: &mut SchemaRegistry) {
    let cell = sig("CELL");
    reg.register(key("DATA").in_record(cell), single("Flags", UInt8));
    reg.register(
        key("XCLC").in_record(cell).with_len(8),
        fixed(vec![f("X", Int32), f("Y", Int32)]),
    );
    reg.register(
        key("XCLC").in_record(cell),
        fixed(vec![f("X", Int32), f("Y", Int32), f("ForceHideLand", UInt32)]),
    );
    reg.register(key("XCLL").in_record(cell), lighting());
    reg.register(key("XCLW").in_record(cell), single("WaterHeight", Float));
    reg.register(key("XNAM").in_record(cell), single("WaterNoiseTexture", String));
    reg.register(key("XCLR").in_record(cell), form_id_array());
    for formids in ["XCIM", "XCCM", "XCWT", "XCAS", "XCMO", "LTMP"] {
        reg.register(key(formids).in_record(cell), form_id("Reference"));
    }
    reg.register(key("XCMT").in_record(cell), single("Music", UInt8));
    reg.register(key("XCET").in_record(cell), single("Unknown", UInt8));
    reg.register(key("LNAM").in_record(cell), single("LightingTemplateFlags", UInt32));
    reg.register(key("XCLL").in_record(sig("LGTM")), lighting());
    reg.register(key("DATA").in_record(sig("LGTM")), lighting());

    let pgrd = sig("PGRD");
    reg.register(key("DATA").in_record(pgrd), single("Count", UInt16));
    reg.register(
        key("PGRP").in_record(pgrd),
        repeating(vec![f("Position", Vec3), f("Connections", UInt8), pad(3)]),
    );
    reg.register(key("PGRR").in_record(pgrd), repeating(vec![f("Point", UInt16)]));
    reg.register(
        key("PGRI").in_record(pgrd),
        repeating(vec![f("Point", Int32), f("Position", Vec3)]),
    );
    reg.register(key("PGRL").in_record(pgrd), repeating(vec![f("Value", UInt32)]));
}

fn worldspaces(reg: &mut SchemaRegistry) {
    let wrld = sig("WRLD");
    for formids in ["WNAM", "CNAM", "NAM2", "NAM3", "INAM", "ZNAM", "XEZN"] {
        reg.register(key(formids).in_record(wrld), form_id("Reference"));
    }
    reg.register(key("NAM4").in_record(wrld), single("LodWaterHeight", Float));
    reg.register(
        key("DNAM").in_record(wrld),
        fixed(vec![f("DefaultLandHeight", Float), f("DefaultWaterHeight", Float)]),
    );
    reg.register(
        key("MNAM").in_record(wrld),
        fixed(vec![
            f("UsableWidth", Int32),
            f("UsableHeight", Int32),
            f("NorthWestCellX", Int16),
            f("NorthWestCellY", Int16),
            f("SouthEastCellX", Int16),
            f("SouthEastCellY", Int16),
        ]),
    );
    reg.register(
        key("ONAM").in_record(wrld),
        fixed(vec![f("WorldMapScale", Float), f("CellXOffset", Float), f("CellYOffset", Float)]),
    );
    reg.register(key("DATA").in_record(wrld), single("Flags", UInt8));
    reg.register(key("NAM0").in_record(wrld), fixed(vec![f("MinX", Float), f("MinY", Float)]));
    reg.register(key("NAM9").in_record(wrld), fixed(vec![f("MaxX", Float), f("MaxY", Float)]));
    reg.register(key("NNAM").in_record(wrld), single("CanopyShadow", String));
    reg.register(key("XNAM").in_record(wrld), single("WaterNoiseTexture", String));
    reg.register(key("OFST").in_record(wrld), repeating(vec![f("Offset", UInt32)]));
    reg.register(key("IMPS").in_record(wrld), byte_array("Swaps"));
    reg.register(key("IMPF").in_record(wrld), byte_array("FootstepMaterials"));
}

fn terrain(reg: &mut SchemaRegistry) {
    let land = sig("LAND");
    reg.register(key("DATA").in_record(land), single("Flags", UInt32));
    reg.register(key("VNML").in_record(land), byte_array("Normals"));
    reg.register(
        key("VHGT").in_record(land),
        fixed(vec![f("Offset", Float), sized("Deltas", ByteArray, 1089), pad(3)]),
    );
    reg.register(key("VCLR").in_record(land), byte_array("Colors"));
    let layer = fixed(vec![
        f("Texture", FormId),
        f("Quadrant", UInt8),
        f("Unused", UInt8),
        f("Layer", Int16),
    ]);
    reg.register(key("BTXT").in_record(land), layer.clone());
    reg.register(key("ATXT").in_record(land), layer);
    reg.register(
        key("VTXT").in_record(land),
        repeating(vec![f("Position", UInt16), pad(2), f("Opacity", Float)]),
    );
    reg.register(key("VTEX").in_record(land), form_id_array());

    let ltex = sig("LTEX");
    reg.register(
        key("HNAM").in_record(ltex),
        fixed(vec![f("MaterialType", UInt8), f("Friction", UInt8), f("Restitution", UInt8)]),
    );
    reg.register(key("SNAM").in_record(ltex), single("SpecularExponent", UInt8));
    reg.register(key("GNAM").in_record(ltex), form_id("Grass"));
    reg.register(key("TNAM").in_record(ltex), form_id("TextureSet"));
}

fn regions(reg: &mut SchemaRegistry) {
    let regn = sig("REGN");
    reg.register(key("RCLR").in_record(regn), single("MapColor", ColorRgba));
    reg.register(key("WNAM").in_record(regn), form_id("Worldspace"));
    reg.register(key("RPLI").in_record(regn), single("EdgeFalloff", UInt32));
    reg.register(key("RPLD").in_record(regn), repeating(vec![f("X", Float), f("Y", Float)]));
    reg.register(
        key("RDAT").in_record(regn),
        fixed(vec![f("Type", UInt32), f("Flags", UInt8), f("Priority", UInt8), pad(2)]),
    );
    reg.register(
        key("RDOT").in_record(regn),
        repeating(vec![
            f("Object", FormId),
            f("ParentIndex", UInt16),
            pad(2),
            f("Density", Float),
            f("Clustering", UInt8),
            f("MinSlope", UInt8),
            f("MaxSlope", UInt8),
            f("Flags", UInt8),
            f("RadiusWrtParent", UInt16),
            f("Radius", UInt16),
            f("MinHeight", Float),
            f("MaxHeight", Float),
            f("Sink", Float),
            f("SinkVariance", Float),
            f("SizeVariance", Float),
            f("AngleVarianceX", UInt16),
            f("AngleVarianceY", UInt16),
            f("AngleVarianceZ", UInt16),
            pad(2),
            sized("Unknown", ByteArray, 4),
        ]),
    );
    reg.register(key("RDGS").in_record(regn), repeating(vec![f("Grass", FormId), pad(4)]));
    reg.register(
        key("RDSD").in_record(regn),
        repeating(vec![f("Sound", FormId), f("Flags", UInt32), f("Chance", UInt32)]),
    );
    reg.register(
        key("RDWT").in_record(regn),
        repeating(vec![f("Weather", FormId), f("Chance", UInt32), f("Global", FormId)]),
    );
    reg.register(key("RDMD").in_record(regn), single("MusicType", UInt32));
    reg.register(key("RDMO").in_record(regn), form_id("Music"));
    reg.register(key("RDSI").in_record(regn), form_id("IncidentalMediaSet"));
    reg.register(key("RDSB").in_record(regn), form_id_array());
    reg.register(key("RDID").in_record(regn), form_id_array());
}

fn flora_and_water(reg: &mut SchemaRegistry) {
    let gras = sig("GRAS");
    reg.register(
        key("DATA").in_record(gras),
        fixed(vec![
            f("Density", UInt8),
            f("MinSlope", UInt8),
            f("MaxSlope", UInt8),
            pad(1),
            f("UnitsFromWaterAmount", UInt16),
            pad(2),
            f("UnitsFromWaterType", UInt32),
            f("PositionRange", Float),
            f("HeightRange", Float),
            f("ColorRange", Float),
            f("WavePeriod", Float),
            f("Flags", UInt8),
            pad(3),
        ]),
    );

    let tree = sig("TREE");
    reg.register(
        key("CNAM").in_record(tree),
        fixed(vec![
            f("LeafCurvature", Float),
            f("MinLeafAngle", Float),
            f("MaxLeafAngle", Float),
            f("BranchDimmingValue", Float),
            f("LeafDimmingValue", Float),
            f("ShadowRadius", Int32),
            f("RockSpeed", Float),
            f("RustleSpeed", Float),
        ]),
    );
    reg.register(
        key("BNAM").in_record(tree),
        fixed(vec![f("BillboardWidth", Float), f("BillboardHeight", Float)]),
    );
    reg.register(key("SNAM").in_record(tree), repeating(vec![f("Seed", UInt32)]));

    let watr = sig("WATR");
    reg.register(key("ANAM").in_record(watr), single("Opacity", UInt8));
    reg.register(key("FNAM").in_record(watr), single("Flags", UInt8));
    reg.register(key("MNAM").in_record(watr), single("MaterialId", String));
    reg.register(key("SNAM").in_record(watr), form_id("Sound"));
    reg.register(key("XNAM").in_record(watr), form_id("ActorEffect"));
    reg.register(key("DATA").in_record(watr), single("Damage", UInt16));
    reg.register(
        key("GNAM").in_record(watr),
        fixed(vec![f("Daytime", FormId), f("Nighttime", FormId), f("Underwater", FormId)]),
    );
    reg.register(
        key("DNAM").in_record(watr),
        variable(vec![
            f("Unknown1", Float),
            f("Unknown2", Float),
            f("Unknown3", Float),
            f("Unknown4", Float),
            f("SunPower", Float),
            f("ReflectivityAmount", Float),
            f("FresnelAmount", Float),
            pad(4),
            f("FogNear", Float),
            f("FogFar", Float),
            f("ShallowColor", ColorRgba),
            f("DeepColor", ColorRgba),
            f("ReflectionColor", ColorRgba),
            pad(4),
            f("RainForce", Float),
            f("RainVelocity", Float),
            f("RainFalloff", Float),
            f("RainDampener", Float),
            f("DisplacementStartingSize", Float),
            f("DisplacementForce", Float),
            f("DisplacementVelocity", Float),
            f("DisplacementFalloff", Float),
            f("DisplacementDampener", Float),
            f("RainStartingSize", Float),
            f("NoiseScale", Float),
            f("NoiseLayer1WindDirection", Float),
            f("NoiseLayer2WindDirection", Float),
            f("NoiseLayer3WindDirection", Float),
            f("NoiseLayer1WindSpeed", Float),
            f("NoiseLayer2WindSpeed", Float),
            f("NoiseLayer3WindSpeed", Float),
            f("DepthFalloffStart", Float),
            f("DepthFalloffEnd", Float),
            f("FogAmount", Float),
            f("NormalsUvScale", Float),
            f("UnderwaterFogAmount", Float),
            f("UnderwaterFogNear", Float),
            f("UnderwaterFogFar", Float),
            f("DistortionAmount", Float),
            f("Shininess", Float),
            f("ReflectionHdrMultiplier", Float),
            f("LightRadius", Float),
            f("LightBrightness", Float),
            f("NoiseLayer1UvScale", Float),
            f("NoiseLayer2UvScale", Float),
            f("NoiseLayer3UvScale", Float),
            f("NoiseLayer1AmplitudeScale", Float),
            f("NoiseLayer2AmplitudeScale", Float),
            f("NoiseLayer3AmplitudeScale", Float),
        ]),
    );

    let pwat = sig("PWAT");
    reg.register(key("DNAM").in_record(pwat), fixed(vec![f("Flags", UInt32), f("Water", FormId)]));
}

fn climate(reg: &mut SchemaRegistry) {
    let clmt = sig("CLMT");
    reg.register(
        key("WLST").in_record(clmt),
        repeating(vec![f("Weather", FormId), f("Chance", Int32), f("Global", FormId)]),
    );
    reg.register(key("FNAM").in_record(clmt), single("SunTexture", String));
    reg.register(key("GNAM").in_record(clmt), single("SunGlareTexture", String));
    reg.register(
        key("TNAM").in_record(clmt),
        fixed(vec![
            f("SunriseBegin", UInt8),
            f("SunriseEnd", UInt8),
            f("SunsetBegin", UInt8),
            f("SunsetEnd", UInt8),
            f("Volatility", UInt8),
            f("MoonPhaseLength", UInt8),
        ]),
    );
}

fn misc_world(reg: &mut SchemaRegistry) {
    let eczn = sig("ECZN");
    reg.register(
        key("DATA").in_record(eczn),
        fixed(vec![
            f("Owner", FormId),
            f("Rank", Int8),
            f("MinimumLevel", Int8),
            f("Flags", UInt8),
            pad(1),
        ]),
    );

    let lscr = sig("LSCR");
    reg.register(
        key("LNAM").in_record(lscr),
        fixed(vec![
            f("Direct", FormId),
            f("Indirect", FormId),
            f("GridY", Int16),
            f("GridX", Int16),
        ]),
    );
    reg.register(key("WMI1").in_record(lscr), form_id("LoadScreenType"));

    let scol = sig("SCOL");
    reg.register(key("ONAM").in_record(scol), form_id("Static"));
    reg.register(
        key("DATA").in_record(scol),
        repeating(vec![f("Placement", PosRot), f("Scale", Float)]),
    );

    let addn = sig("ADDN");
    reg.register(key("DATA").in_record(addn), single("NodeIndex", Int32));
    reg.register(
        key("DNAM").in_record(addn),
        fixed(vec![f("MasterParticleSystemCap", UInt16), pad(2)]),
    );
    reg.register(key("SNAM").in_record(addn), form_id("Sound"));
}
