//! Command handlers

use anyhow::{Context, Result};
use board::backdrop::{PARTICLE_COUNT, ParticleField, Pointer};
use board::document::Document;
use board::page::HomePage;
use board::render::{render_json, render_page};
use board::Config;
use chrono::Local;
use clap::Subcommand;
use common::{DraftField, JobId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use std::time::Duration;

const BANNER_WIDTH: usize = 72;
const BANNER_HEIGHT: usize = 10;
const MAX_FPS: u32 = 120;

#[derive(Subcommand)]
pub enum Commands {
    /// Load the job list and render the page
    Browse {
        /// Search text matched against job titles
        #[arg(short, long, default_value = "")]
        query: String,

        /// Star a job (repeatable)
        #[arg(long = "save")]
        save: Vec<JobId>,

        /// Simulated vertical scroll offset
        #[arg(long, default_value_t = 0.0)]
        scroll: f64,

        /// Active category chip
        #[arg(long, default_value = "all")]
        category: String,

        /// Selected location option
        #[arg(long, default_value = "")]
        location: String,

        /// Skip the particle banner
        #[arg(long)]
        no_backdrop: bool,

        /// Print the page state as JSON instead of rendering it
        #[arg(long)]
        json: bool,
    },
    /// Post a job, then render the page
    Post {
        #[arg(long)]
        title: String,
        #[arg(long)]
        company: String,
        #[arg(long, default_value = "")]
        location: String,
        /// Full-time, Part-time, Contract or Internship
        #[arg(long = "type", default_value = "")]
        job_type: String,
        #[arg(long, default_value = "")]
        salary: String,
        #[arg(long)]
        logo: Option<String>,
        #[arg(long)]
        featured: bool,
    },
    /// Animate the particle backdrop
    Backdrop {
        #[arg(long, default_value_t = 90)]
        frames: u32,
        /// Frames per second, 1 to 120
        #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..=MAX_FPS as i64))]
        fps: u32,
        #[arg(long, default_value_t = BANNER_WIDTH)]
        width: usize,
        #[arg(long, default_value_t = 20)]
        height: usize,
        /// Pointer x in -1..1 the camera drifts toward
        #[arg(long, allow_hyphen_values = true)]
        pointer_x: Option<f32>,
        /// Pointer y in -1..1 the camera drifts toward
        #[arg(long, allow_hyphen_values = true)]
        pointer_y: Option<f32>,
    },
}

pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Browse {
            query,
            save,
            scroll,
            category,
            location,
            no_backdrop,
            json,
        } => {
            let source = config.client()?;
            let document = Document::new();
            let mounted = HomePage::mount(&document);
            let mut page = HomePage::new(Local::now().date_naive());
            let mut rng = StdRng::from_entropy();

            page.load(&source, &mut rng).await;
            page.set_query(query);
            for id in save {
                page.toggle_save(id);
            }
            if !page.select_category(&category) {
                tracing::warn!(%category, "unknown category, keeping default");
            }
            if !page.select_location(&location) {
                tracing::warn!(%location, "unknown location, keeping default");
            }
            document.scroll(scroll);
            mounted.deliver_scroll(&mut page);

            if json {
                println!("{}", render_json(&page).context("serializing page view")?);
            } else {
                let frame = (!no_backdrop).then(|| banner(&mut rng));
                print!("{}", render_page(&page, frame.as_ref()));
            }
            Ok(())
        }
        Commands::Post {
            title,
            company,
            location,
            job_type,
            salary,
            logo,
            featured,
        } => {
            let source = config.client()?;
            let document = Document::new();
            let _mounted = HomePage::mount(&document);
            let mut page = HomePage::new(Local::now().date_naive());
            page.load(&source, &mut StdRng::from_entropy()).await;

            page.open_post_form();
            page.update_draft(DraftField::Title, title);
            page.update_draft(DraftField::Company, company);
            page.update_draft(DraftField::Location, location);
            page.update_draft(DraftField::JobType, job_type);
            page.update_draft(DraftField::Salary, salary);
            if let Some(logo) = logo {
                page.update_draft(DraftField::Logo, logo);
            }
            page.set_draft_featured(featured);

            let accepted = page.submit(&source).await;
            print!("{}", render_page(&page, None));
            if !accepted {
                anyhow::bail!("job was not posted");
            }
            Ok(())
        }
        Commands::Backdrop {
            frames,
            fps,
            width,
            height,
            pointer_x,
            pointer_y,
        } => {
            let pointer = match (pointer_x, pointer_y) {
                (None, None) => None,
                (x, y) => Some(Pointer {
                    x: x.unwrap_or(0.0),
                    y: y.unwrap_or(0.0),
                }),
            };
            animate(frames, fps.clamp(1, MAX_FPS), width, height, pointer).await;
            Ok(())
        }
    }
}

fn banner(rng: &mut StdRng) -> board::backdrop::Frame {
    ParticleField::new(PARTICLE_COUNT, rng).render(BANNER_WIDTH, BANNER_HEIGHT)
}

async fn animate(frames: u32, fps: u32, width: usize, height: usize, pointer: Option<Pointer>) {
    let mut field = ParticleField::new(PARTICLE_COUNT, &mut StdRng::from_entropy());
    let frame_time = Duration::from_secs(1) / fps;
    let mut interval = tokio::time::interval(frame_time);
    let start = tokio::time::Instant::now();

    for _ in 0..frames {
        interval.tick().await;
        field.tick(start.elapsed(), pointer);
        // Home the cursor and clear before each frame.
        print!("\x1b[H\x1b[2J{}", field.render(width, height));
        let _ = std::io::stdout().flush();
    }
    println!();
}
