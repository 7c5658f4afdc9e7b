//! Interactive numbered menu: one entry per collection plus "Populate All".

use colored::*;
use db::DocumentStore;
use std::io::{BufRead, Write};

use crate::error::SeedError;
use crate::rng::SeedRng;
use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    content::ContentSeeder, course::CourseSeeder, logs::LogSeeder, module::ModuleSeeder,
    notification::NotificationSeeder, question::QuestionSeeder,
    question_bank::QuestionBankSeeder, quiz_response::QuizResponseSeeder,
    room_message::RoomMessageSeeder, student_course::StudentCourseSeeder,
    study_room::StudyRoomSeeder, thread::ThreadSeeder, thread_message::ThreadMessageSeeder,
    thread_message_reply::ThreadMessageReplySeeder, user::UserSeeder,
};

pub const POPULATE_ALL_OPTION: u8 = 16;

/// `(menu option, count)` in dependency order for "Populate All".
pub const POPULATE_ALL: [(u8, usize); 15] = [
    (1, 50),    // users
    (2, 50),    // courses
    (3, 100),   // study rooms
    (4, 100),   // room messages
    (5, 100),   // student courses
    (7, 200),   // content
    (6, 200),   // modules (per course, count unused)
    (8, 1000),  // questions
    (9, 0),     // question banks (per module)
    (10, 200),  // quiz responses
    (11, 300),  // notifications
    (12, 100),  // logs
    (13, 200),  // threads
    (14, 400),  // thread messages
    (15, 300),  // thread message replies
];

pub fn seeder_for(option: u8) -> Option<Box<dyn Seeder>> {
    let seeder: Box<dyn Seeder> = match option {
        1 => Box::new(UserSeeder),
        2 => Box::new(CourseSeeder),
        3 => Box::new(StudyRoomSeeder),
        4 => Box::new(RoomMessageSeeder),
        5 => Box::new(StudentCourseSeeder),
        6 => Box::new(ModuleSeeder),
        7 => Box::new(ContentSeeder),
        8 => Box::new(QuestionSeeder),
        9 => Box::new(QuestionBankSeeder),
        10 => Box::new(QuizResponseSeeder),
        11 => Box::new(NotificationSeeder),
        12 => Box::new(LogSeeder),
        13 => Box::new(ThreadSeeder),
        14 => Box::new(ThreadMessageSeeder),
        15 => Box::new(ThreadMessageReplySeeder),
        _ => return None,
    };
    Some(seeder)
}

fn read_line<R: BufRead>(input: &mut R) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn print_menu<W: Write>(out: &mut W) {
    let _ = writeln!(out, "Choose an option to populate:");
    for option in 1..POPULATE_ALL_OPTION {
        if let Some(seeder) = seeder_for(option) {
            let _ = writeln!(out, "{}. {}", option, seeder.name());
        }
    }
    let _ = writeln!(out, "{}. Populate All", POPULATE_ALL_OPTION);
}

/// Shows the menu, reads a choice (and a count where one applies) and runs it.
///
/// Invalid input is reported on `out` and treated as a no-op.
pub async fn run_menu<R, W>(
    input: &mut R,
    out: &mut W,
    store: &dyn DocumentStore,
    rng: &mut SeedRng,
) -> Result<(), SeedError>
where
    R: BufRead,
    W: Write,
{
    print_menu(out);
    let _ = write!(out, "Enter your choice (1-{}): ", POPULATE_ALL_OPTION);
    let _ = out.flush();

    let choice = read_line(input).and_then(|line| line.parse::<u8>().ok());
    let Some(choice) = choice.filter(|c| (1..=POPULATE_ALL_OPTION).contains(c)) else {
        let _ = writeln!(
            out,
            "{}",
            format!("Invalid choice! Please enter a number between 1 and {}.", POPULATE_ALL_OPTION)
                .red()
        );
        return Ok(());
    };

    if choice == POPULATE_ALL_OPTION {
        return populate_all(out, store, rng).await;
    }

    let Some(seeder) = seeder_for(choice) else {
        return Ok(());
    };

    let count = if seeder.takes_count() {
        let _ = write!(
            out,
            "Enter the number of {} to insert: ",
            seeder.name().to_lowercase()
        );
        let _ = out.flush();
        match read_line(input).and_then(|line| line.parse::<usize>().ok()) {
            Some(n) if n > 0 => n,
            _ => {
                let _ = writeln!(out, "{}", "Invalid count! Please enter a positive number.".red());
                return Ok(());
            }
        }
    } else {
        0
    };

    run_seeder(seeder.as_ref(), store, rng, count, out).await?;
    Ok(())
}

/// Runs every seeder in dependency order, stopping at the first failure.
pub async fn populate_all<W: Write>(
    out: &mut W,
    store: &dyn DocumentStore,
    rng: &mut SeedRng,
) -> Result<(), SeedError> {
    let _ = writeln!(out, "Populating all with default counts...");
    log::info!("Populating all collections with default counts");

    for (option, count) in POPULATE_ALL {
        if let Some(seeder) = seeder_for(option) {
            run_seeder(seeder.as_ref(), store, rng, count, out).await?;
        }
    }
    Ok(())
}
