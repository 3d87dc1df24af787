//! Arrays vs. growable lists.
//!
//! Run with: cargo run --bin arrays -- --section lists

use clap::{Parser, ValueEnum};
use colored::Colorize;
use oop_lessons::logging;
use oop_lessons::roster::{format_list, signed_binary_search, Roster, Student};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Section {
    Arrays,
    Lists,
    All,
}

#[derive(Parser, Debug)]
#[command(about = "Fixed-size arrays next to growable lists")]
struct Cli {
    /// Which half of the lesson to run
    #[arg(long, value_enum, default_value_t = Section::All)]
    section: Section,

    /// Disable colored headers
    #[arg(long)]
    no_color: bool,
}

fn sample_students() -> [Student; 4] {
    [
        Student::new("Aisha", 78),
        Student::new("Ben", 91),
        Student::new("Chloe", 85),
        Student::new("Dumi", 91),
    ]
}

// =============================================================================
// Part 1: Arrays
// =============================================================================

fn demo_arrays() {
    println!("{}", "Arrays".bold());

    // 1) Fixed-size array
    let mut scores = [88, 95, 70, 100, 92];
    println!("Original scores: {}", format_list(scores));

    // 2) In-place sort
    scores.sort_unstable();
    println!("Sorted scores:   {}", format_list(scores));

    // 3) Binary search, only valid once sorted
    println!("Index of 95 after sort: {}", signed_binary_search(&scores, &95));

    // 4) Copies leave the original alone
    let top3 = scores[..3].to_vec();
    let mid = scores[1..4].to_vec();
    println!("Top 3: {}", format_list(&top3));
    println!("Mid (1..3): {}", format_list(&mid));

    // 5) Fill
    let all_forty_twos = [42; 5];
    println!("Filled: {}", format_list(all_forty_twos));

    // 6) Equality compares contents
    let a = [1, 2, 3];
    let b = [1, 2, 3];
    let c = [1, 2, 4];
    println!("a equals b? {}", a == b);
    println!("a equals c? {}", a == c);

    // 7) Nested arrays
    let grid = [[1, 2], [3, 4]];
    println!("2D grid: {:?}", grid);

    // 8) Arrays of structs, sorted with a comparator
    let mut students = sample_students();
    println!("Students (original): {}", format_list(&students));
    students.sort_by(Student::by_grade_then_name);
    println!("Students (sorted by grade, name): {}", format_list(&students));
}

// =============================================================================
// Part 2: Growable lists
// =============================================================================

fn demo_lists() {
    println!("{}", "Lists".bold());

    // 1) Append
    let mut todo: Vec<String> = Vec::new();
    todo.push("Buy milk".to_string());
    todo.push("Finish lab".to_string());
    todo.push("Email lecturer".to_string());
    println!("Todo list: {}", format_list(&todo));
    println!("Size: {}", todo.len());

    // 2) Access and update
    if let Some(first) = todo.first() {
        println!("First task: {first}");
    }
    todo[0] = "Buy oat milk".to_string();
    println!("After update: {}", format_list(&todo));

    // 3) Search
    println!("Contains 'Finish lab'? {}", todo.iter().any(|t| t == "Finish lab"));
    let index = todo
        .iter()
        .position(|t| t == "Email lecturer")
        .map_or(-1, |i| i as i64);
    println!("Index of 'Email lecturer': {index}");

    // 4) Remove by index, then by value (a miss does nothing)
    todo.remove(1);
    if let Some(pos) = todo.iter().position(|t| t == "Not there") {
        todo.remove(pos);
    }
    println!("After removals: {}", format_list(&todo));

    // 5) Three ways to iterate
    print!("Loop (index): ");
    for i in 0..todo.len() {
        print!("[{i}]={} ", todo[i]);
    }
    println!();

    print!("Loop (for-in): ");
    for task in &todo {
        print!("{task} | ");
    }
    println!();

    print!("Loop (Iterator): ");
    let mut it = todo.iter();
    while let Some(task) = it.next() {
        print!("{task} ~ ");
    }
    println!();

    // 6) Bulk operations
    todo.extend(["Clean desk", "Stretch"].map(String::from));
    println!("After extend: {}", format_list(&todo));
    todo.retain(|task| !task.to_lowercase().contains("email"));
    println!("After retain without 'email': {}", format_list(&todo));

    // 7) Natural order
    todo.sort();
    println!("Sorted todo: {}", format_list(&todo));

    // 8) Conversions
    let as_array: Box<[String]> = todo.into_boxed_slice();
    println!("Back to array: {}", format_list(as_array.iter()));
    let from_array = Vec::from(["Alpha", "Bravo", "Charlie"]);
    println!("From array via Vec::from: {}", format_list(&from_array));

    // 9) A list of structs
    let mut roster: Roster = sample_students().into_iter().collect();
    println!("\nRoster (original): {roster}");

    if let Some(top) = roster.get(1) {
        println!("Student at index 1: {top}");
    }
    roster.set(0, Student::new("Aisha", 80));
    println!("After update: {roster}");

    if let Some(average) = roster.average_grade() {
        println!("Average grade: {average:.2}");
    }
    if let Some(student) = roster.first_with_initial('c') {
        println!("First name starting with 'C': {student}");
    }

    roster.retain_at_least(85);
    println!("After filter (>=85): {roster}");

    roster.sort_by_grade_desc_then_name();
    println!("Sorted (grade desc, name): {roster}");

    println!("Pretty print each student:");
    for student in &roster {
        println!(" - {} got {}", student.name, student.grade);
    }
}

fn main() {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    logging::init();

    match cli.section {
        Section::Arrays => demo_arrays(),
        Section::Lists => demo_lists(),
        Section::All => {
            demo_arrays();
            println!("\n-------------------------------------------------\n");
            demo_lists();
        }
    }
}
