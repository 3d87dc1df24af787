//! Inheritance lesson: LO1..LO7, plus the class-activity answers.
//!
//! Run with: cargo run --bin inheritance -- --answers

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use colored::Colorize;
use oop_lessons::animal::{classification, Animal, AnimalExt, Bird, Cat, Dog, Fish, PetDog, Species};
use oop_lessons::logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Lesson {
    Lo1,
    Lo2,
    Lo3,
    Lo4,
    Lo5,
    Lo6,
    Lo7,
}

impl Lesson {
    const ALL: [Lesson; 7] = [
        Lesson::Lo1,
        Lesson::Lo2,
        Lesson::Lo3,
        Lesson::Lo4,
        Lesson::Lo5,
        Lesson::Lo6,
        Lesson::Lo7,
    ];

    fn run(self, out: &mut dyn Write) -> io::Result<()> {
        match self {
            Lesson::Lo1 => run_lo1(out),
            Lesson::Lo2 => run_lo2(out),
            Lesson::Lo3 => run_lo3(out),
            Lesson::Lo4 => run_lo4(out),
            Lesson::Lo5 => run_lo5(out),
            Lesson::Lo6 => run_lo6(out),
            Lesson::Lo7 => run_lo7(out),
        }
    }

    /// LO7 has no coded answer.
    fn run_answer(self, out: &mut dyn Write) -> io::Result<()> {
        match self {
            Lesson::Lo1 => answer_lo1(out),
            Lesson::Lo2 => answer_lo2(out),
            Lesson::Lo3 => answer_lo3(out),
            Lesson::Lo4 => answer_lo4(out),
            Lesson::Lo5 => answer_lo5(out),
            Lesson::Lo6 => answer_lo6(out),
            Lesson::Lo7 => Ok(()),
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Inheritance, overriding and encapsulation with a small animal hierarchy")]
struct Cli {
    /// Lessons to run (default: all, in order)
    #[arg(long = "lesson", value_enum)]
    lessons: Vec<Lesson>,

    /// Also run the class-activity answers
    #[arg(long)]
    answers: bool,

    /// Disable colored headers
    #[arg(long)]
    no_color: bool,
}

fn header(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", format!("== {title} ==").bold())
}

fn answer_header(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", format!("-- {title} --").cyan())
}

// =============================================================================
// Lessons
// =============================================================================

fn run_lo1(out: &mut dyn Write) -> io::Result<()> {
    header(out, "LO1: Inheritance")?;
    // Dog and Cat are Animals: both fit behind the same trait object, which
    // is the whole is-a check.
    let animals: [Box<dyn Animal>; 2] = [Box::new(Dog::new("Rex", 2)), Box::new(Cat::new("Misty", 3))];
    for animal in &animals {
        writeln!(out, "{} is an Animal? true", animal.name())?;
    }
    Ok(())
}

fn run_lo2(out: &mut dyn Write) -> io::Result<()> {
    header(out, "LO2: Extend classes")?;
    let bolt = Dog::new("Bolt", 4);
    writeln!(out, "{}", bolt.describe())
}

fn run_lo3(out: &mut dyn Write) -> io::Result<()> {
    header(out, "LO3: Override superclass methods")?;
    let pet: Box<dyn Animal> = Box::new(Dog::new("Fido", 1));
    writeln!(out, "pet.speak() = {}", pet.speak())
}

fn run_lo4(out: &mut dyn Write) -> io::Result<()> {
    header(out, "LO4: Constructor chaining")?;
    // Animal() runs before Dog()
    let _dog = Dog::new("ConstructorChain", 2);
    Ok(())
}

fn run_lo5(out: &mut dyn Write) -> io::Result<()> {
    header(out, "LO5: Access superclass methods with super")?;
    let scout = Dog::new("Scout", 5);
    writeln!(out, "Dog.describe() uses super.basicInfo(): {}", scout.describe())?;
    writeln!(out, "Dog.speak() also called super.speak(): {}", scout.speak())
}

fn run_lo6(out: &mut dyn Write) -> io::Result<()> {
    header(out, "LO6: Information hiding (private + getters/setters)")?;
    let mut luna = Cat::new("Luna", 2);

    writeln!(out, "Name via getter: {}, age: {}", luna.name(), luna.age())?;
    luna.set_age(-5);
    writeln!(out, "After invalid setAge(-5), age: {}", luna.age())?;
    luna.set_age(3);
    writeln!(out, "After setAge(3), age: {}", luna.age())
}

fn run_lo7(out: &mut dyn Write) -> io::Result<()> {
    header(out, "LO7: Methods you cannot override")?;
    let rules = Dog::new("Rules", 1);
    writeln!(out, "final kingdom(): {}", rules.kingdom())?;
    writeln!(out, "static classification(): {}", classification())
}

// =============================================================================
// Answers
// =============================================================================

fn answer_lo1(out: &mut dyn Write) -> io::Result<()> {
    answer_header(out, "LO1 Answer")?;
    let sky: Box<dyn Animal> = Box::new(Bird::new("Sky", 1));
    writeln!(out, "{} speaks: {}", sky.name(), sky.speak())?;
    writeln!(out, "{} moves: {}", sky.name(), sky.locomotion())?;
    // The species tag answers the narrower is-a question
    writeln!(out, "{} is a Dog? {}", sky.name(), sky.species().is_a(Species::Dog))
}

fn answer_lo2(out: &mut dyn Write) -> io::Result<()> {
    answer_header(out, "LO2 Answer")?;
    let bubbles = Fish::new("Bubbles", 1);
    writeln!(out, "{} moves: {}", bubbles.name(), bubbles.locomotion())?;
    writeln!(out, "{} speaks: {}", bubbles.name(), bubbles.speak())
}

fn answer_lo3(out: &mut dyn Write) -> io::Result<()> {
    answer_header(out, "LO3 Answer")?;
    let rex: Box<dyn Animal> = Box::new(PetDog::new("Rex", 2));
    writeln!(out, "{}", rex.speak())
}

fn answer_lo4(out: &mut dyn Write) -> io::Result<()> {
    answer_header(out, "LO4 Answer")?;
    let bird = Bird::new("OrderCheck", 1);
    writeln!(out, "Created {}", bird.name())
}

fn answer_lo5(out: &mut dyn Write) -> io::Result<()> {
    answer_header(out, "LO5 Answer")?;
    let buddy = PetDog::new("Buddy", 4);
    writeln!(out, "{}", buddy.speak())
}

fn answer_lo6(out: &mut dyn Write) -> io::Result<()> {
    answer_header(out, "LO6 Answer (pattern)")?;
    writeln!(
        out,
        "Add a private weight_kg field with a set_weight that rejects values <= 0, like set_age."
    )
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    logging::init();

    let mut lessons = if cli.lessons.is_empty() {
        Lesson::ALL.to_vec()
    } else {
        cli.lessons
    };
    lessons.sort();
    lessons.dedup();

    // Library narration goes to stdout through the logging layer, so the
    // lessons write to the same stream.
    let mut out = io::stdout().lock();
    for lesson in &lessons {
        lesson.run(&mut out)?;
    }

    if cli.answers {
        for lesson in &lessons {
            lesson.run_answer(&mut out)?;
        }
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
