//! Image spaces, weather, explosions, projectiles, impacts and shaders.
//!
//! Image-space modifiers (`IMAD`) are resolved by a dedicated rule and have no
//! table entries.

use crate::field::FieldType::*;
use crate::schema::SchemaRegistry;
use crate::signature::sig;

use super::*;

pub(super) fn register(reg: &mut SchemaRegistry) {
    image_spaces(reg);
    weather(reg);
    explosions_and_projectiles(reg);
    impacts_and_textures(reg);
    effect_shaders(reg);
}

fn image_spaces(reg: &mut SchemaRegistry) {
    let imgs = sig("IMGS");
    reg.register(
        key("DNAM").in_record(imgs),
        variable(vec![
            f("HdrEyeAdaptSpeed", Float),
            f("HdrBlurRadius", Float),
            f("HdrBlurPasses", Float),
            f("HdrEmissiveMultiplier", Float),
            f("HdrTargetLum", Float),
            f("HdrUpperLumClamp", Float),
            f("HdrBrightScale", Float),
            f("HdrBrightClamp", Float),
            f("HdrLumRampNoTexture", Float),
            f("HdrLumRampMin", Float),
            f("HdrLumRampMax", Float),
            f("HdrSunlightDimmer", Float),
            f("HdrGrassDimmer", Float),
            f("HdrTreeDimmer", Float),
            f("HdrSkinDimmer", Float),
            f("BloomBlurRadius", Float),
            f("BloomAlphaMultiplierInterior", Float),
            f("BloomAlphaMultiplierExterior", Float),
            f("GetHitBlurRadius", Float),
            f("GetHitBlurDampingConstant", Float),
            f("GetHitDampingConstant", Float),
            f("NightEyeTintRed", Float),
            f("NightEyeTintGreen", Float),
            f("NightEyeTintBlue", Float),
            f("NightEyeBrightness", Float),
            f("CinematicSaturation", Float),
            f("CinematicContrastAverage", Float),
            f("CinematicContrastValue", Float),
            f("CinematicBrightness", Float),
            f("TintRed", Float),
            f("TintGreen", Float),
            f("TintBlue", Float),
            f("TintValue", Float),
            pad(4),
            f("Flags", UInt8),
            pad(3),
        ]),
    );
}

fn weather(reg: &mut SchemaRegistry) {
    let wthr = sig("WTHR");
    for layer in ["DNAM", "CNAM", "ANAM", "BNAM"] {
        reg.register(key(layer).in_record(wthr), single("CloudTexture", String));
    }
    reg.register(key("LNAM").in_record(wthr), single("MaxCloudLayers", UInt32));
    reg.register(key("ONAM").in_record(wthr), byte_array("CloudSpeeds"));
    reg.register(key("PNAM").in_record(wthr), repeating(vec![f("CloudColor", ColorRgba)]));
    reg.register(key("NAM0").in_record(wthr), repeating(vec![f("WeatherColor", ColorRgba)]));
    reg.register(
        key("FNAM").in_record(wthr),
        fixed(vec![
            f("DayNear", Float),
            f("DayFar", Float),
            f("NightNear", Float),
            f("NightFar", Float),
            f("DayPower", Float),
            f("NightPower", Float),
        ]),
    );
    // The 304-byte form is converted before lookup; its layout mixes byte orders.
    reg.register(key("INAM").in_record(wthr), byte_array("Unknown"));
    reg.register(key("DATA").in_record(wthr), byte_array("WeatherData"));
    reg.register(
        key("SNAM").in_record(wthr),
        fixed(vec![f("Sound", FormId), f("Type", UInt32)]),
    );
    reg.register(key("NAM1").in_record(wthr), byte_array("Unknown"));
}

fn explosions_and_projectiles(reg: &mut SchemaRegistry) {
    let expl = sig("EXPL");
    reg.register(
        key("DATA").in_record(expl),
        fixed(vec![
            f("Force", Float),
            f("Damage", Float),
            f("Radius", Float),
            f("Light", FormId),
            f("Sound1", FormId),
            f("Flags", UInt32),
            f("IsRadius", Float),
            f("ImpactDataSet", FormId),
            f("Sound2", FormId),
            f("RadiationLevel", Float),
            f("RadiationDissipationTime", Float),
            f("RadiationRadius", Float),
            f("SoundLevel", UInt32),
        ]),
    );
    reg.register(key("INAM").in_record(expl), form_id("PlacedImpactObject"));

    let proj = sig("PROJ");
    reg.register(
        key("DATA").in_record(proj),
        variable(vec![
            f("Flags", UInt16),
            f("Type", UInt16),
            f("Gravity", Float),
            f("Speed", Float),
            f("Range", Float),
            f("Light", FormId),
            f("MuzzleFlashLight", FormId),
            f("TracerChance", Float),
            f("ExplosionProximity", Float),
            f("ExplosionTimer", Float),
            f("Explosion", FormId),
            f("Sound", FormId),
            f("MuzzleFlashDuration", Float),
            f("FadeDuration", Float),
            f("ImpactForce", Float),
            f("CountdownSound", FormId),
            f("DisableSound", FormId),
            f("DefaultWeaponSource", FormId),
            f("RotationX", Float),
            f("RotationY", Float),
            f("RotationZ", Float),
            f("BouncyMultiplier", Float),
        ]),
    );
    reg.register(key("NAM1").in_record(proj), single("MuzzleFlashModel", String));
    reg.register(key("NAM2").in_record(proj), byte_array("TextureHashes"));
    reg.register(key("VNAM").in_record(proj), single("SoundLevel", UInt32));
}

fn impacts_and_textures(reg: &mut SchemaRegistry) {
    reg.register(
        key("DODT"),
        fixed(vec![
            f("MinWidth", Float),
            f("MaxWidth", Float),
            f("MinHeight", Float),
            f("MaxHeight", Float),
            f("Depth", Float),
            f("Shininess", Float),
            f("ParallaxScale", Float),
            f("ParallaxPasses", UInt8),
            f("Flags", UInt8),
            pad(2),
            f("Color", ColorRgba),
        ]),
    );
    reg.register(key("DNAM").in_record(sig("TXST")), single("Flags", UInt16));

    let ipct = sig("IPCT");
    reg.register(
        key("DATA").in_record(ipct),
        fixed(vec![
            f("EffectDuration", Float),
            f("EffectOrientation", UInt32),
            f("AngleThreshold", Float),
            f("PlacementRadius", Float),
            f("SoundLevel", UInt32),
            f("NoDecalData", UInt32),
        ]),
    );
    reg.register(key("DNAM").in_record(ipct), form_id("TextureSet"));
    reg.register(key("SNAM").in_record(ipct), form_id("Sound1"));
    reg.register(key("NAM1").in_record(ipct), form_id("Sound2"));

    reg.register(key("DATA").in_record(sig("IPDS")), form_id_array());
}

fn effect_shaders(reg: &mut SchemaRegistry) {
    let efsh = sig("EFSH");
    reg.register(key("ICO2").in_record(efsh), single("ParticleShaderTexture", String));
    reg.register(key("NAM7").in_record(efsh), single("HolesTexture", String));
    reg.register(
        key("DATA").in_record(efsh),
        variable(vec![
            f("Flags", UInt8),
            pad(3),
            f("MembraneSourceBlendMode", UInt32),
            f("MembraneBlendOperation", UInt32),
            f("MembraneZTestFunction", UInt32),
            f("FillColor1", ColorRgba),
            f("FillAlphaFadeInTime", Float),
            f("FillFullAlphaTime", Float),
            f("FillAlphaFadeOutTime", Float),
            f("FillPersistentAlphaRatio", Float),
            f("FillAlphaPulseAmplitude", Float),
            f("FillAlphaPulseFrequency", Float),
            f("FillTextureAnimationSpeedU", Float),
            f("FillTextureAnimationSpeedV", Float),
            f("EdgeFallOff", Float),
            f("EdgeColor", ColorRgba),
            f("EdgeAlphaFadeInTime", Float),
            f("EdgeFullAlphaTime", Float),
            f("EdgeAlphaFadeOutTime", Float),
            f("EdgePersistentAlphaRatio", Float),
            f("EdgeAlphaPulseAmplitude", Float),
            f("EdgeAlphaPulseFrequency", Float),
            f("FillFullAlphaRatio", Float),
            f("EdgeFullAlphaRatio", Float),
            f("MembraneDestBlendMode", UInt32),
            f("ParticleSourceBlendMode", UInt32),
            f("ParticleBlendOperation", UInt32),
            f("ParticleZTestFunction", UInt32),
            f("ParticleDestBlendMode", UInt32),
            f("ParticleBirthRampUpTime", Float),
            f("ParticleFullBirthTime", Float),
            f("ParticleBirthRampDownTime", Float),
            f("ParticleFullBirthRatio", Float),
            f("ParticlePersistentCount", Float),
            f("ParticleLifetime", Float),
            f("ParticleLifetimeVariance", Float),
            f("ParticleInitialSpeedAlongNormal", Float),
            f("ParticleAccelerationAlongNormal", Float),
            f("ParticleInitialVelocity1", Float),
            f("ParticleInitialVelocity2", Float),
            f("ParticleInitialVelocity3", Float),
            f("ParticleAcceleration1", Float),
            f("ParticleAcceleration2", Float),
            f("ParticleAcceleration3", Float),
            f("ParticleScaleKey1", Float),
            f("ParticleScaleKey2", Float),
            f("ParticleScaleKey1Time", Float),
            f("ParticleScaleKey2Time", Float),
            f("ColorKey1", ColorRgba),
            f("ColorKey2", ColorRgba),
            f("ColorKey3", ColorRgba),
            f("ColorKey1Alpha", Float),
            f("ColorKey2Alpha", Float),
            f("ColorKey3Alpha", Float),
            f("ColorKey1Time", Float),
            f("ColorKey2Time", Float),
            f("ColorKey3Time", Float),
            f("ParticleInitialSpeedAlongNormalVariance", Float),
            f("ParticleInitialRotation", Float),
            f("ParticleInitialRotationVariance", Float),
            f("ParticleRotationSpeed", Float),
            f("ParticleRotationSpeedVariance", Float),
            f("AddonModels", FormId),
            f("HolesStartTime", Float),
            f("HolesEndTime", Float),
            f("HolesStartValue", Float),
            f("HolesEndValue", Float),
            f("EdgeWidth", Float),
            f("EdgeColorArgb", ColorArgb),
            f("ExplosionWindSpeed", Float),
            f("TextureCountU", UInt32),
            f("TextureCountV", UInt32),
            f("AddonModelsFadeInTime", Float),
            f("AddonModelsFadeOutTime", Float),
            f("AddonModelsScaleStart", Float),
            f("AddonModelsScaleEnd", Float),
            f("AddonModelsScaleInTime", Float),
            f("AddonModelsScaleOutTime", Float),
        ]),
    );
}
