use strobe::{Error, Gpio, GpioConfig, MatchStrictness, Severity, Simulation};

#[test]
fn test_check_success_with_wildcards() {
    let mut sim = Simulation::new();
    let line = sim.add_line("gpio", 4);
    let gpio = Gpio::new(line, "GPIO_TB");

    gpio.set(&mut sim, &"1010".parse().unwrap()).unwrap();
    gpio.check(&mut sim, &"1-1-".parse().unwrap(), Severity::Error)
        .unwrap();

    assert_eq!(sim.alerts().total(), 0);
}

#[test]
fn test_check_mismatch_raises_one_alert() {
    let mut sim = Simulation::new();
    let line = sim.add_line("gpio", 4);
    let gpio = Gpio::new(line, "GPIO_TB");

    gpio.set(&mut sim, &"0010".parse().unwrap()).unwrap();
    gpio.check(&mut sim, &"1010".parse().unwrap(), Severity::Error)
        .unwrap();

    assert_eq!(sim.alerts().count(Severity::Error), 1);
    let alert = sim.alerts().last().unwrap();
    assert_eq!(alert.scope, "GPIO_TB");
    // Genuine value mismatch renders in hex
    assert!(alert.message.contains("x\"2\""), "{}", alert.message);
    assert!(alert.message.contains("x\"A\""), "{}", alert.message);
}

#[test]
fn test_check_is_idempotent() {
    let mut sim = Simulation::new();
    let line = sim.add_line("gpio", 4);
    let gpio = Gpio::new(line, "GPIO_TB");

    gpio.set(&mut sim, &"0110".parse().unwrap()).unwrap();
    let expected = "0110".parse().unwrap();

    gpio.check(&mut sim, &expected, Severity::Error).unwrap();
    gpio.check(&mut sim, &expected, Severity::Error).unwrap();
    assert_eq!(sim.alerts().total(), 0);

    let wrong = "1001".parse().unwrap();
    gpio.check(&mut sim, &wrong, Severity::Warning).unwrap();
    gpio.check(&mut sim, &wrong, Severity::Warning).unwrap();
    assert_eq!(sim.alerts().count(Severity::Warning), 2);
}

#[test]
fn test_exact_mismatch_on_weak_value_renders_binary() {
    let mut sim = Simulation::new();
    let line = sim.add_line("gpio", 4);
    let config = GpioConfig {
        match_strictness: MatchStrictness::Exact,
        ..GpioConfig::default()
    };
    let gpio = Gpio::with_config(line, "GPIO_TB", config);

    // Weak-asserted bit 0: passes Std, fails Exact
    gpio.set(&mut sim, &"H010".parse().unwrap()).unwrap();
    gpio.check(&mut sim, &"1010".parse().unwrap(), Severity::Error)
        .unwrap();

    assert_eq!(sim.alerts().count(Severity::Error), 1);
    let alert = sim.alerts().last().unwrap();
    assert!(alert.message.contains("b\"H010\""), "{}", alert.message);
    assert!(alert.message.contains("b\"1010\""), "{}", alert.message);
}

#[test]
fn test_std_accepts_weak_drive() {
    let mut sim = Simulation::new();
    let line = sim.add_line("gpio", 4);
    let gpio = Gpio::new(line, "GPIO_TB");

    gpio.set(&mut sim, &"H01L".parse().unwrap()).unwrap();
    gpio.check(&mut sim, &"1010".parse().unwrap(), Severity::Error)
        .unwrap();

    assert_eq!(sim.alerts().total(), 0);
}

#[test]
fn test_fatal_alert_aborts_check() {
    let mut sim = Simulation::new();
    let line = sim.add_line("gpio", 4);
    let gpio = Gpio::new(line, "GPIO_TB");

    gpio.set(&mut sim, &"0000".parse().unwrap()).unwrap();
    let err = gpio
        .check(&mut sim, &"1111".parse().unwrap(), Severity::Failure)
        .unwrap_err();

    assert!(matches!(err, Error::FatalAlert(_)));
    // The alert is recorded before the abort
    assert_eq!(sim.alerts().count(Severity::Failure), 1);
}
