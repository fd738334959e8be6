use std::io::{self, Write};

use anyhow::Result;

use crate::ChatSession;

/// Run an interactive console over one chat session. Presentation only:
/// every line goes through `retrieve` and the answer is printed back.
pub fn run(session: &mut ChatSession) -> Result<()> {
    println!("Intelligent HR Assistant");
    println!("Ask payroll or HR questions (leave balance, employee details, payslips).");
    println!("Type 'exit' to quit.");

    let mut transcript: Vec<(String, String)> = Vec::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") {
            break;
        }
        if input.eq_ignore_ascii_case(":history") {
            for (query, answer) in &transcript {
                println!("You: {}", query);
                println!("Bot: {}", answer);
            }
            continue;
        }

        let answer = session.retrieve(input);
        println!("{}", answer);
        transcript.push((input.to_string(), answer));
    }

    println!("Goodbye!");
    Ok(())
}
