use approx::assert_relative_eq;
use units::Temperature;

use crate::parameters::{
    Parameter, ParameterError, ParameterStore, ReactorParameters, ReactorSliders, SliderSpec,
};

#[test]
fn defaults() {
    let params = ReactorParameters::default();
    assert_eq!(params.heat_transfer_coeff, 0.0);
    assert_eq!(params.reverse_rate_factor, 0.0);
    assert_eq!(params.feed_temp.to_kelvin(), 265.0);
    assert_eq!(params.residence_time, 400.0);
    assert!(params.validate().is_ok());
}

#[test]
fn negative_values_are_rejected() {
    let params = ReactorParameters {
        heat_transfer_coeff: -1.0,
        ..ReactorParameters::default()
    };
    assert_eq!(
        params.validate(),
        Err(ParameterError::Negative {
            name: "heat transfer coefficient",
            value: -1.0
        })
    );

    let params = ReactorParameters::default().with(Parameter::ResidenceTime, -5.0);
    assert!(matches!(
        params.validate(),
        Err(ParameterError::Negative { name: "residence time", .. })
    ));
}

#[test]
fn non_finite_values_are_rejected() {
    let params = ReactorParameters::default().with(Parameter::ReverseRateFactor, f64::NAN);
    assert!(matches!(
        params.validate(),
        Err(ParameterError::NotFinite { name: "reverse rate factor", .. })
    ));

    let params = ReactorParameters::default().with(Parameter::FeedTemp, f64::INFINITY);
    assert!(matches!(params.validate(), Err(ParameterError::NotFinite { .. })));
}

#[test]
fn zero_residence_time_is_valid() {
    let params = ReactorParameters::default().with(Parameter::ResidenceTime, 0.0);
    assert!(params.validate().is_ok());
}

#[test]
fn error_messages_name_the_parameter() {
    let err = ParameterError::Negative {
        name: "heat transfer coefficient",
        value: -2.0,
    };
    assert_eq!(err.to_string(), "heat transfer coefficient must not be negative, got -2");
}

#[test]
fn replace_is_all_or_nothing() {
    let mut store = ParameterStore::new();
    let good = ReactorParameters {
        heat_transfer_coeff: 5.0,
        reverse_rate_factor: 1.0e13,
        feed_temp: Temperature::from_kelvin(280.0),
        residence_time: 600.0,
    };
    store.replace(good).unwrap();
    assert_eq!(store.current(), good);

    let bad = ReactorParameters {
        heat_transfer_coeff: 10.0,
        residence_time: -1.0,
        ..good
    };
    assert!(store.replace(bad).is_err());
    assert_eq!(store.current(), good);
}

#[test]
fn reset_restores_defaults() {
    let mut store = ParameterStore::new();
    store
        .replace(ReactorParameters::default().with(Parameter::HeatTransferCoeff, 12.0))
        .unwrap();
    store.reset();
    assert_eq!(store.current(), ReactorParameters::default());
}

#[test]
fn step_up_moves_one_slider_step() {
    let mut store = ParameterStore::new();

    assert_relative_eq!(store.step_up(Parameter::HeatTransferCoeff).heat_transfer_coeff, 0.5);
    assert_relative_eq!(store.step_up(Parameter::ReverseRateFactor).reverse_rate_factor, 1.0e12);
    assert_relative_eq!(store.step_up(Parameter::FeedTemp).feed_temp.to_kelvin(), 266.0);
    assert_relative_eq!(store.step_up(Parameter::ResidenceTime).residence_time, 410.0);
}

#[test]
fn step_up_clamps_at_slider_maximum() {
    let mut store = ParameterStore::new();
    store
        .replace(ReactorParameters::default().with(Parameter::HeatTransferCoeff, 50.0))
        .unwrap();
    assert_relative_eq!(store.step_up(Parameter::HeatTransferCoeff).heat_transfer_coeff, 50.0);
}

#[test]
fn slider_step_up_snaps_to_grid() {
    let slider = SliderSpec::new(0.0, 50.0, 0.5);
    assert_relative_eq!(slider.step_up(0.3), 0.5);
    assert_relative_eq!(slider.step_up(0.5), 1.0);
    assert!(slider.contains(25.0));
    assert!(!slider.contains(50.5));
}

#[test]
fn custom_sliders() {
    let sliders = ReactorSliders {
        feed_temp: SliderSpec::new(260.0, 265.0, 5.0),
        ..ReactorSliders::default()
    };
    let mut store = ParameterStore::with_sliders(sliders);
    assert_relative_eq!(store.step_up(Parameter::FeedTemp).feed_temp.to_kelvin(), 265.0);
    assert_eq!(store.sliders().get(Parameter::FeedTemp).step, 5.0);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let params: ReactorParameters =
        serde_json::from_str(r#"{"heatTransferCoeff": 2.5, "feedTemp": 290}"#).unwrap();
    assert_eq!(params.heat_transfer_coeff, 2.5);
    assert_eq!(params.feed_temp.to_kelvin(), 290.0);
    assert_eq!(params.residence_time, 400.0);

    let parameter: Parameter = serde_json::from_str(r#""tau""#).unwrap();
    assert_eq!(parameter, Parameter::ResidenceTime);
}
