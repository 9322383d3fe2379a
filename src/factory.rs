// Pattern 1: Factory Method - Car Factories
// Client code depends on `CarFactory` and `BaseCar` only; adding a new
// car/factory pair never touches `app_factory`.

use crate::console::Console;
use crate::error::FactoryError;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

// ============================================================================
// Product: BaseCar and its variants
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarKind {
    Mastodon,
    Rhino,
}

impl CarKind {
    pub const ALL: [CarKind; 2] = [CarKind::Mastodon, CarKind::Rhino];

    pub fn tag(self) -> &'static str {
        match self {
            CarKind::Mastodon => "MASTODON",
            CarKind::Rhino => "RHINO",
        }
    }
}

impl fmt::Display for CarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CarKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mastodon" => Ok(CarKind::Mastodon),
            "rhino" => Ok(CarKind::Rhino),
            _ => Err(FactoryError::UnknownKind(s.to_string())),
        }
    }
}

pub trait BaseCar {
    fn kind(&self) -> CarKind;

    /// Fixed price in MXN, already formatted with thousands separators.
    fn cost(&self) -> &'static str;

    fn cost_line(&self) -> String {
        format!("[{}] Car Cost: {} MXN", self.kind(), self.cost())
    }

    fn show_cost(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.cost_line())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MastodonCar;

impl BaseCar for MastodonCar {
    fn kind(&self) -> CarKind {
        CarKind::Mastodon
    }

    fn cost(&self) -> &'static str {
        "300,000"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RhinoCar;

impl BaseCar for RhinoCar {
    fn kind(&self) -> CarKind {
        CarKind::Rhino
    }

    fn cost(&self) -> &'static str {
        "500,000"
    }
}

// ============================================================================
// Creator: CarFactory and its variants
// ============================================================================

pub trait CarFactory {
    fn create_car(&self) -> Box<dyn BaseCar>;

    /// Variant of every car this factory builds.
    fn kind(&self) -> CarKind;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MastodonCarFactory;

impl CarFactory for MastodonCarFactory {
    fn create_car(&self) -> Box<dyn BaseCar> {
        Box::new(MastodonCar)
    }

    fn kind(&self) -> CarKind {
        CarKind::Mastodon
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RhinoCarFactory;

impl CarFactory for RhinoCarFactory {
    fn create_car(&self) -> Box<dyn BaseCar> {
        Box::new(RhinoCar)
    }

    fn kind(&self) -> CarKind {
        CarKind::Rhino
    }
}

/// Picks a factory by tag so callers never name the concrete factory types.
pub fn create_factory(kind: CarKind) -> Box<dyn CarFactory> {
    match kind {
        CarKind::Mastodon => Box::new(MastodonCarFactory),
        CarKind::Rhino => Box::new(RhinoCarFactory),
    }
}

pub fn factory_by_name(name: &str) -> Result<Box<dyn CarFactory>, FactoryError> {
    Ok(create_factory(name.parse()?))
}

// ============================================================================
// Client
// ============================================================================

pub fn app_factory<W: Write>(factory: &dyn CarFactory, console: &mut Console<W>) -> io::Result<()> {
    let car = factory.create_car();
    car.show_cost(console)
}

/// Runs the Mastodon factory, then the Rhino factory.
pub fn run_demo<W: Write>(console: &mut Console<W>) -> io::Result<()> {
    app_factory(&MastodonCarFactory, console)?;
    app_factory(&RhinoCarFactory, console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_mastodon_factory_builds_mastodon() {
        let car = MastodonCarFactory.create_car();
        assert_eq!(car.kind(), CarKind::Mastodon);
        assert_eq!(car.cost_line(), "[MASTODON] Car Cost: 300,000 MXN");
    }

    #[test]
    fn test_rhino_factory_builds_rhino() {
        let car = RhinoCarFactory.create_car();
        assert_eq!(car.kind(), CarKind::Rhino);
        assert_eq!(car.cost_line(), "[RHINO] Car Cost: 500,000 MXN");
    }

    #[test]
    fn test_every_factory_builds_its_paired_car() {
        for kind in CarKind::ALL {
            let factory = create_factory(kind);
            assert_eq!(factory.kind(), kind);
            assert_eq!(factory.create_car().kind(), kind);
        }
    }

    #[test]
    fn test_factory_by_name() {
        let factory = factory_by_name("Rhino").unwrap();
        assert_eq!(factory.create_car().kind(), CarKind::Rhino);

        let factory = factory_by_name(" mastodon ").unwrap();
        assert_eq!(factory.create_car().kind(), CarKind::Mastodon);
    }

    #[test]
    fn test_factory_by_unknown_name() {
        let err = factory_by_name("tiger").err().unwrap();
        assert_eq!(err, FactoryError::UnknownKind("tiger".to_string()));
    }

    #[test]
    fn test_app_factory_writes_one_line() {
        let mut console = Console::new(Vec::new());
        app_factory(&RhinoCarFactory, &mut console).unwrap();

        let out = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(out, "[RHINO] Car Cost: 500,000 MXN\n");
    }

    #[test]
    fn test_show_cost_writes_fixed_line() {
        let mut out: Vec<u8> = Vec::new();
        MastodonCar.show_cost(&mut out).unwrap();
        MastodonCar.show_cost(&mut out).unwrap();
        RhinoCar.show_cost(&mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "[MASTODON] Car Cost: 300,000 MXN\n\
             [MASTODON] Car Cost: 300,000 MXN\n\
             [RHINO] Car Cost: 500,000 MXN\n"
        );
    }

    struct CountingCar {
        shown: Rc<Cell<usize>>,
    }

    impl BaseCar for CountingCar {
        fn kind(&self) -> CarKind {
            CarKind::Rhino
        }

        fn cost(&self) -> &'static str {
            "0"
        }

        fn show_cost(&self, out: &mut dyn Write) -> io::Result<()> {
            self.shown.set(self.shown.get() + 1);
            writeln!(out, "counted")
        }
    }

    struct CountingFactory {
        shown: Rc<Cell<usize>>,
    }

    impl CarFactory for CountingFactory {
        fn create_car(&self) -> Box<dyn BaseCar> {
            Box::new(CountingCar {
                shown: Rc::clone(&self.shown),
            })
        }

        fn kind(&self) -> CarKind {
            CarKind::Rhino
        }
    }

    #[test]
    fn test_app_factory_goes_through_show_cost() {
        let shown = Rc::new(Cell::new(0));
        let factory = CountingFactory {
            shown: Rc::clone(&shown),
        };
        let mut console = Console::new(Vec::<u8>::new());
        app_factory(&factory, &mut console).unwrap();

        assert_eq!(shown.get(), 1);
        assert_eq!(console.into_inner(), b"counted\n");
    }

    #[test]
    fn test_run_demo_order() {
        let mut console = Console::new(Vec::new());
        run_demo(&mut console).unwrap();

        let out = String::from_utf8(console.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec!["[MASTODON] Car Cost: 300,000 MXN", "[RHINO] Car Cost: 500,000 MXN"]
        );
    }

    proptest! {
        #[test]
        fn prop_cost_line_independent_of_call_order(order in prop::collection::vec(any::<bool>(), 1..32)) {
            for pick_rhino in order {
                let (kind, expected) = if pick_rhino {
                    (CarKind::Rhino, "[RHINO] Car Cost: 500,000 MXN")
                } else {
                    (CarKind::Mastodon, "[MASTODON] Car Cost: 300,000 MXN")
                };
                let car = create_factory(kind).create_car();
                prop_assert_eq!(car.cost_line(), expected);
            }
        }
    }
}
