use approx::assert_relative_eq;

use crate::volume::Volume;

#[test]
fn test_split_even() {
    let (a, b) = Volume::from_cubic_meters(2.0).split(1.0);
    assert_relative_eq!(a.to_cubic_meters(), 1.0);
    assert_relative_eq!(b.to_cubic_meters(), 1.0);
}

#[test]
fn test_split_parts_sum_to_whole() {
    let total = Volume::from_cubic_meters(2.0);
    for ratio in [0.25, 0.5, 1.0, 1.75, 3.0] {
        let (a, b) = total.split(ratio);
        assert_relative_eq!(
            a.to_cubic_meters() + b.to_cubic_meters(),
            2.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(a / b, ratio, epsilon = 1e-12);
    }
}

#[test]
fn test_volume_ratio() {
    let total = Volume::from_cubic_meters(2.0);
    let half = total * 0.5;
    assert_relative_eq!(total / half, 2.0);
}
