//! The `quizdesk init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizdesk.toml
    if std::path::Path::new("quizdesk.toml").exists() {
        println!("quizdesk.toml already exists, skipping.");
    } else {
        std::fs::write("quizdesk.toml", SAMPLE_CONFIG)?;
        println!("Created quizdesk.toml");
    }

    // Create a sample subject file
    std::fs::create_dir_all("quizzes")?;
    let sample_path = std::path::Path::new("quizzes/general_knowledge.txt");
    if sample_path.exists() {
        println!("quizzes/general_knowledge.txt already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_BANK)?;
        println!("Created quizzes/general_knowledge.txt");
    }

    // Create the data directory for the results log
    std::fs::create_dir_all("data")?;

    println!("\nNext steps:");
    println!("  1. Add subject files to quizzes/ (one question per line)");
    println!("  2. Run: quizdesk validate --bank quizzes/");
    println!("  3. Run: quizdesk");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizdesk configuration

# Directory holding subject files (one .txt per subject)
quizzes_dir = "quizzes"

# Where completed attempts are appended
results_file = "data/results.csv"

# Percent needed to pass a quiz
pass_threshold = 60.0

# Ask at most this many questions per quiz (remove for all)
# question_limit = 10

# Number of leaderboard entries to show
leaderboard_size = 10
"#;

const SAMPLE_BANK: &str = "\
What is the capital of France?|A) Berlin|B) Paris|C) Madrid|D) Rome|B
Which planet is known as the Red Planet?|A) Venus|B) Jupiter|C) Mars|D) Saturn|C
What is 7 x 8?|A) 54|B) 56|C) 58|D) 64|B
Which ocean is the largest?|A) Atlantic|B) Indian|C) Arctic|D) Pacific|D
Who wrote \"Romeo and Juliet\"?|A) Shakespeare|B) Dickens|C) Austen|D) Tolstoy|A
";
