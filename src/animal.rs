//! A closed hierarchy of animals.
//!
//! `Animal` is the capability set shared by every variant. State lives in an
//! [`AnimalCore`] whose fields are private, so the only way to change an age
//! is through the validating setter. `Animal` is sealed: the five variants in
//! this module are the whole hierarchy.
//!
//! Members that must not vary per variant sit outside the overridable trait:
//! `kingdom` and `basic_info` come from [`AnimalExt`], which has a single
//! blanket impl (a second impl would not compile), and `classification` is a
//! plain function.

use std::fmt;

use thiserror::Error;
use tracing::{info, warn};

/// Kingdom shared by every animal.
pub const KINGDOM: &str = "Animalia";

/// Classification label. Declared once, for the whole hierarchy.
pub const CLASSIFICATION: &str = "Chordata";

/// What an animal says when its variant has nothing better to say.
pub const SILENT: &str = "...";

/// Default locomotion.
pub const WALK: &str = "walk";

/// Type-level classification. Not part of [`Animal`], so nothing dispatches on it.
pub fn classification() -> &'static str {
    CLASSIFICATION
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgeError {
    #[error("Invalid age: {rejected} (keeping {kept})")]
    Negative { rejected: i32, kept: u32 },
}

// =============================================================================
// Shared state
// =============================================================================

/// Name and age common to every animal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalCore {
    name: String,
    age: u32,
}

impl AnimalCore {
    /// Base constructor. A negative `age` is rejected against the starting
    /// age of 0.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        let name = name.into();
        info!("Animal() ctor for {name}");

        let mut core = Self { name, age: 0 };
        core.set_age(age);
        core
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn try_set_age(&mut self, age: i32) -> Result<(), AgeError> {
        let valid = u32::try_from(age).map_err(|_| AgeError::Negative {
            rejected: age,
            kept: self.age,
        })?;
        self.age = valid;
        Ok(())
    }

    /// Advisory setter: a negative age is logged and ignored.
    pub fn set_age(&mut self, age: i32) {
        if let Err(err) = self.try_set_age(age) {
            warn!("{err}");
        }
    }
}

// =============================================================================
// Species tag
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Dog,
    Cat,
    Bird,
    Fish,
    PetDog,
}

impl Species {
    pub const ALL: [Species; 5] = [
        Species::Dog,
        Species::Cat,
        Species::Bird,
        Species::Fish,
        Species::PetDog,
    ];

    /// The variant this one refines, if any.
    pub fn parent(self) -> Option<Species> {
        match self {
            Species::PetDog => Some(Species::Dog),
            _ => None,
        }
    }

    /// `true` when `self` is `other` or refines it.
    pub fn is_a(self, other: Species) -> bool {
        let mut current = Some(self);
        while let Some(species) = current {
            if species == other {
                return true;
            }
            current = species.parent();
        }
        false
    }

    /// Build an instance of this variant behind the base capability set.
    pub fn create(self, name: impl Into<String>, age: i32) -> Box<dyn Animal> {
        match self {
            Species::Dog => Box::new(Dog::new(name, age)),
            Species::Cat => Box::new(Cat::new(name, age)),
            Species::Bird => Box::new(Bird::new(name, age)),
            Species::Fish => Box::new(Fish::new(name, age)),
            Species::PetDog => Box::new(PetDog::new(name, age)),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
            Species::Bird => "Bird",
            Species::Fish => "Fish",
            Species::PetDog => "PetDog",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Capability set
// =============================================================================

mod sealed {
    pub trait Sealed {}
}

pub trait Animal: sealed::Sealed {
    fn core(&self) -> &AnimalCore;
    fn core_mut(&mut self) -> &mut AnimalCore;
    fn species(&self) -> Species;

    fn speak(&self) -> String {
        SILENT.to_string()
    }

    /// How the animal gets around (`move` is a keyword).
    fn locomotion(&self) -> &'static str {
        WALK
    }

    fn name(&self) -> &str {
        self.core().name()
    }

    fn age(&self) -> u32 {
        self.core().age()
    }

    fn set_age(&mut self, age: i32) {
        self.core_mut().set_age(age);
    }

    fn try_set_age(&mut self, age: i32) -> Result<(), AgeError> {
        self.core_mut().try_set_age(age)
    }
}

/// Members no variant can replace.
pub trait AnimalExt {
    fn kingdom(&self) -> &'static str;
    fn basic_info(&self) -> String;
}

impl<T: Animal + ?Sized> AnimalExt for T {
    fn kingdom(&self) -> &'static str {
        KINGDOM
    }

    fn basic_info(&self) -> String {
        format!("{} ({})", self.name(), self.age())
    }
}

// =============================================================================
// Variants
// =============================================================================

#[derive(Debug, Clone)]
pub struct Dog {
    core: AnimalCore,
}

impl Dog {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        let core = AnimalCore::new(name, age);
        info!("Dog() ctor for {}", core.name());
        Self { core }
    }

    pub fn describe(&self) -> String {
        format!("Dog {} likes to {}", self.basic_info(), self.locomotion())
    }
}

impl sealed::Sealed for Dog {}

impl Animal for Dog {
    fn core(&self) -> &AnimalCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AnimalCore {
        &mut self.core
    }

    fn species(&self) -> Species {
        Species::Dog
    }

    fn speak(&self) -> String {
        format!("{SILENT} Woof!")
    }

    fn locomotion(&self) -> &'static str {
        "run"
    }
}

#[derive(Debug, Clone)]
pub struct Cat {
    core: AnimalCore,
}

impl Cat {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        let core = AnimalCore::new(name, age);
        info!("Cat() ctor for {}", core.name());
        Self { core }
    }
}

impl sealed::Sealed for Cat {}

impl Animal for Cat {
    fn core(&self) -> &AnimalCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AnimalCore {
        &mut self.core
    }

    fn species(&self) -> Species {
        Species::Cat
    }

    fn speak(&self) -> String {
        "Meow".to_string()
    }

    fn locomotion(&self) -> &'static str {
        "slink"
    }
}

#[derive(Debug, Clone)]
pub struct Bird {
    core: AnimalCore,
}

impl Bird {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            core: AnimalCore::new(name, age),
        }
    }
}

impl sealed::Sealed for Bird {}

impl Animal for Bird {
    fn core(&self) -> &AnimalCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AnimalCore {
        &mut self.core
    }

    fn species(&self) -> Species {
        Species::Bird
    }

    fn speak(&self) -> String {
        "Tweet".to_string()
    }

    fn locomotion(&self) -> &'static str {
        "fly"
    }
}

/// Keeps the default `speak`.
#[derive(Debug, Clone)]
pub struct Fish {
    core: AnimalCore,
}

impl Fish {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            core: AnimalCore::new(name, age),
        }
    }
}

impl sealed::Sealed for Fish {}

impl Animal for Fish {
    fn core(&self) -> &AnimalCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AnimalCore {
        &mut self.core
    }

    fn species(&self) -> Species {
        Species::Fish
    }

    fn locomotion(&self) -> &'static str {
        "swim"
    }
}

/// A `Dog` that introduces itself. Everything except `speak` is forwarded
/// to the wrapped `Dog`.
#[derive(Debug, Clone)]
pub struct PetDog {
    dog: Dog,
}

impl PetDog {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            dog: Dog::new(name, age),
        }
    }

    pub fn as_dog(&self) -> &Dog {
        &self.dog
    }

    pub fn describe(&self) -> String {
        self.dog.describe()
    }
}

impl sealed::Sealed for PetDog {}

impl Animal for PetDog {
    fn core(&self) -> &AnimalCore {
        self.dog.core()
    }

    fn core_mut(&mut self) -> &mut AnimalCore {
        self.dog.core_mut()
    }

    fn species(&self) -> Species {
        Species::PetDog
    }

    fn speak(&self) -> String {
        format!("{} I'm {}", self.dog.speak(), self.name())
    }

    fn locomotion(&self) -> &'static str {
        self.dog.locomotion()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` with a subscriber formatted like the binaries' and return the
    /// logged lines.
    fn logged_lines(f: impl FnOnce()) -> Vec<String> {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .without_time()
            .with_level(false)
            .with_target(false)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    }

    #[test]
    fn test_set_age_logs_rejection() {
        let mut luna = Cat::new("Luna", 2);
        let lines = logged_lines(|| luna.set_age(-5));
        assert_eq!(lines, vec!["Invalid age: -5 (keeping 2)"]);
        assert_eq!(luna.age(), 2);
    }

    #[test]
    fn test_valid_set_age_logs_nothing() {
        let mut luna = Cat::new("Luna", 2);
        let lines = logged_lines(|| luna.set_age(3));
        assert!(lines.is_empty(), "{lines:?}");
    }

    #[test]
    fn test_negative_initial_age_logs_keeping_zero() {
        let lines = logged_lines(|| {
            Fish::new("X", -3);
        });
        assert_eq!(lines, vec!["Animal() ctor for X", "Invalid age: -3 (keeping 0)"]);
    }

    #[test]
    fn test_constructor_chaining_order() {
        let lines = logged_lines(|| {
            PetDog::new("Buddy", 4);
        });
        assert_eq!(lines, vec!["Animal() ctor for Buddy", "Dog() ctor for Buddy"]);

        let lines = logged_lines(|| {
            Cat::new("Misty", 3);
        });
        assert_eq!(lines, vec!["Animal() ctor for Misty", "Cat() ctor for Misty"]);
    }

    #[test]
    fn test_bird_and_fish_log_only_base_constructor() {
        let lines = logged_lines(|| {
            Bird::new("Sky", 1);
            Fish::new("Bubbles", 1);
        });
        assert_eq!(lines, vec!["Animal() ctor for Sky", "Animal() ctor for Bubbles"]);
    }

    #[test]
    fn test_dog_scenario() {
        let rex = Dog::new("Rex", 2);
        assert_eq!(rex.name(), "Rex");
        assert_eq!(rex.age(), 2);
        assert!(rex.speak().contains("Woof!"));
        assert_eq!(rex.locomotion(), "run");
    }

    #[test]
    fn test_cat_rejects_negative_age() {
        let mut luna = Cat::new("Luna", 2);
        luna.set_age(-5);
        assert_eq!(luna.age(), 2);

        luna.set_age(3);
        assert_eq!(luna.age(), 3);
    }

    #[test]
    fn test_pet_dog_composes_dog_speak() {
        let buddy = PetDog::new("Buddy", 4);
        let plain = Dog::new("Buddy", 4);
        assert_eq!(buddy.speak(), format!("{} I'm Buddy", plain.speak()));
        assert_eq!(buddy.speak(), "... Woof! I'm Buddy");
    }

    #[test]
    fn test_negative_initial_age_starts_at_zero() {
        let mut fish = Fish::new("Bubbles", -3);
        assert_eq!(fish.age(), 0);
        assert_eq!(
            fish.try_set_age(-1),
            Err(AgeError::Negative {
                rejected: -1,
                kept: 0
            })
        );
    }

    #[test]
    fn test_age_error_message() {
        let err = AgeError::Negative {
            rejected: -5,
            kept: 2,
        };
        assert_eq!(err.to_string(), "Invalid age: -5 (keeping 2)");
    }

    #[test]
    fn test_dynamic_dispatch_through_base() {
        let pet: Box<dyn Animal> = Box::new(Dog::new("Fido", 1));
        assert_eq!(pet.speak(), "... Woof!");
        assert_eq!(pet.locomotion(), "run");
        assert_eq!(pet.species(), Species::Dog);
    }

    #[test]
    fn test_variant_outputs() {
        let expected = [
            (Species::Dog, "... Woof!", "run"),
            (Species::Cat, "Meow", "slink"),
            (Species::Bird, "Tweet", "fly"),
            (Species::Fish, "...", "swim"),
            (Species::PetDog, "... Woof! I'm Sky", "run"),
        ];

        for (species, speech, locomotion) in expected {
            let animal = species.create("Sky", 1);
            assert_eq!(animal.species(), species);
            assert_eq!(animal.speak(), speech, "{species}");
            assert_eq!(animal.locomotion(), locomotion, "{species}");
        }
    }

    #[test]
    fn test_kingdom_is_fixed() {
        for species in Species::ALL {
            let animal = species.create("Any", 1);
            assert_eq!(animal.kingdom(), "Animalia");
        }
        assert_eq!(Dog::new("Rules", 1).kingdom(), KINGDOM);
    }

    #[test]
    fn test_classification_is_type_level() {
        let base: Box<dyn Animal> = Box::new(PetDog::new("Rex", 2));
        let pet = PetDog::new("Buddy", 4);

        // Same answer whichever value is in scope: nothing to dispatch on
        assert_eq!(base.species(), Species::PetDog);
        assert_eq!(pet.as_dog().species(), Species::Dog);
        assert_eq!(classification(), "Chordata");
        assert_eq!(classification(), CLASSIFICATION);
    }

    #[test]
    fn test_basic_info_and_describe() {
        let scout = Dog::new("Scout", 5);
        assert_eq!(scout.basic_info(), "Scout (5)");
        assert_eq!(scout.describe(), "Dog Scout (5) likes to run");

        let buddy = PetDog::new("Buddy", 4);
        assert_eq!(buddy.describe(), "Dog Buddy (4) likes to run");
        assert_eq!(buddy.as_dog().name(), "Buddy");
    }

    #[test]
    fn test_pet_dog_age_updates_reach_dog() {
        let mut buddy = PetDog::new("Buddy", 4);
        buddy.set_age(6);
        assert_eq!(buddy.as_dog().age(), 6);
        assert_eq!(buddy.basic_info(), "Buddy (6)");
    }

    #[test]
    fn test_species_is_a() {
        assert!(Species::PetDog.is_a(Species::Dog));
        assert!(Species::PetDog.is_a(Species::PetDog));
        assert!(!Species::Dog.is_a(Species::PetDog));
        assert!(!Species::Cat.is_a(Species::Dog));
    }

    proptest! {
        #[test]
        fn test_negative_set_age_is_noop(
            species in prop::sample::select(Species::ALL.to_vec()),
            initial in 0i32..1_000,
            rejected in i32::MIN..0,
        ) {
            let mut animal = species.create("Prop", initial);
            let before = animal.age();
            animal.set_age(rejected);
            prop_assert_eq!(animal.age(), before);
        }

        #[test]
        fn test_non_negative_set_age_commits(
            species in prop::sample::select(Species::ALL.to_vec()),
            initial in any::<i32>(),
            age in 0i32..=i32::MAX,
        ) {
            let mut animal = species.create("Prop", initial);
            animal.set_age(age);
            prop_assert_eq!(i64::from(animal.age()), i64::from(age));
        }

        #[test]
        fn test_constructed_age_is_clamped_input(initial in any::<i32>()) {
            let cat = Cat::new("Prop", initial);
            prop_assert_eq!(i64::from(cat.age()), i64::from(initial.max(0)));
        }
    }
}
