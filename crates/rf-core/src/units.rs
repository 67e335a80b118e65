// rf-core/src/units.rs

use uom::si::f64::{
    Frequency as UomFrequency, MolarConcentration as UomMolarConcentration, Time as UomTime,
    Volume as UomVolume, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Concentration = UomMolarConcentration;
/// First-order rate constant (1/s).
pub type RateConstant = UomFrequency;
pub type Time = UomTime;
pub type Volume = UomVolume;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn mol_per_m3(v: f64) -> Concentration {
    use uom::si::molar_concentration::mole_per_cubic_meter;
    Concentration::new::<mole_per_cubic_meter>(v)
}

#[inline]
pub fn per_s(v: f64) -> RateConstant {
    use uom::si::frequency::hertz;
    RateConstant::new::<hertz>(v)
}

/// Residence time `Vr / Q`.
pub fn residence_time(vr: Volume, q: VolumeRate) -> Time {
    vr / q
}
