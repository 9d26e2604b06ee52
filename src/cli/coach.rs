//! Coach commands: talk to the AI wellness coach

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Subcommand;

use bloom::catalog::skills::WellnessSkill;
use bloom::coach::{ChatTurn, Coach, GeminiClient};
use bloom::config::Config;

use super::{icon, open_progress};

#[derive(Subcommand)]
pub enum CoachCommands {
    /// A short daily affirmation
    Affirm,

    /// Chat with the coach (interactive; 'exit' to quit)
    Chat,

    /// A guided step-by-step exercise for a skill
    Plan {
        /// A wellness skill name or anything you want help with
        skill: String,
    },

    /// Three self-care ideas for how you're feeling
    Ideas { feeling: String },

    /// A short educational piece about a topic
    Learn {
        topic: String,

        /// Who the piece is for
        #[arg(long, default_value = "someone exploring this for themselves")]
        audience: String,
    },

    /// Generate an uplifting article about a topic
    Blog { topic: String },

    /// Generate a 5-question self-assessment quiz
    Quiz { topic: String },

    /// Ask the coach a one-off free-form question
    Ask { prompt: String },

    /// A gratitude journal prompt
    Gratitude,

    /// Personalized insights from your recent activity
    Insights,
}

pub async fn coach_command(config: &Config, command: CoachCommands) -> Result<()> {
    let coach = Coach::<GeminiClient>::from_config(config);

    match command {
        CoachCommands::Affirm => {
            println!("{}{}", icon(config, "✨ "), coach.daily_affirmation());
        }
        CoachCommands::Chat => {
            println!("Chatting with your wellness coach. Type 'exit' to quit.\n");
            let stdin = std::io::stdin();
            let mut history: Vec<ChatTurn> = Vec::new();

            loop {
                print!("you> ");
                std::io::stdout().flush()?;
                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    break; // EOF
                }
                let message = line.trim();
                if message.is_empty() {
                    continue;
                }
                if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
                    break;
                }

                match coach.chat(&history, message) {
                    Ok(reply) => {
                        println!("coach> {}\n", reply.trim());
                        history.push(ChatTurn::user(message));
                        history.push(ChatTurn::model(reply));
                    }
                    Err(e) => {
                        tracing::warn!("chat failed: {e}");
                        println!("coach> Sorry, I'm having trouble responding right now. Please try again.\n");
                    }
                }
            }
        }
        CoachCommands::Plan { skill } => {
            // Known catalog skills get their full title in the prompt
            let skill = WellnessSkill::search(&skill)
                .map(|s| s.title.to_string())
                .unwrap_or(skill);
            let plan = coach.action_plan(&skill);
            println!("{}\n", plan.title);
            for (index, step) in plan.steps.iter().enumerate() {
                println!("  {}. {step}", index + 1);
            }
        }
        CoachCommands::Ideas { feeling } => match coach.self_care_ideas(&feeling) {
            Ok(ideas) => {
                println!("Ideas for when you're feeling {feeling}:\n");
                for idea in ideas {
                    println!("  {}", idea.title);
                    for step in idea.steps {
                        println!("    - {step}");
                    }
                }
            }
            Err(e) => {
                tracing::warn!("ideas failed: {e}");
                println!("Sorry, I couldn't come up with ideas right now. Please try again later.");
            }
        },
        CoachCommands::Learn { topic, audience } => {
            println!("{}", coach.educational(&topic, &audience));
        }
        CoachCommands::Blog { topic } => {
            let post = coach.blog_post(&topic);
            println!("{post}");
        }
        CoachCommands::Quiz { topic } => match coach.generate_quiz(&topic) {
            Some(quiz) => {
                println!("{} - {}\n", quiz.title, quiz.description);
                for (index, question) in quiz.questions.iter().enumerate() {
                    println!("  {}. {question}", index + 1);
                }
                let progress = open_progress(config)?;
                progress.recorder().store_generated_quiz(
                    &quiz.id,
                    &topic,
                    &serde_json::to_string(&quiz)?,
                )?;
                println!("\nSaved as {}", quiz.id);
            }
            None => {
                println!("Sorry, I couldn't generate a quiz about \"{topic}\" right now.");
            }
        },
        CoachCommands::Ask { prompt } => {
            println!("{}", coach.deep_dive(&prompt)?);
        }
        CoachCommands::Gratitude => {
            println!("{}{}", icon(config, "🙏 "), coach.gratitude_prompt());
        }
        CoachCommands::Insights => {
            let progress = open_progress(config)?;
            let moods = progress.query().recent_moods(5)?;
            let history = progress.query().screening_history(None, 3)?;
            println!("{}", coach.insights(&moods, &history));
        }
    }
    Ok(())
}
