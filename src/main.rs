//! Quadratic - solve and plot quadratic equations in the terminal.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quadratic::app::{App, Theme};
use quadratic::input::InputForm;
use quadratic::solver::{format_complex, format_real, Solution};
use quadratic::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "quadratic")]
#[command(about = "Solve and plot quadratic equations in the terminal", long_about = None)]
struct Args {
    /// Leading coefficient
    #[arg(short, long, allow_hyphen_values = true)]
    a: Option<String>,

    /// Linear coefficient
    #[arg(short, long, allow_hyphen_values = true)]
    b: Option<String>,

    /// Constant term
    #[arg(short, long, allow_hyphen_values = true)]
    c: Option<String>,

    /// Initial color theme
    #[arg(long, value_enum, default_value_t = Theme::Light)]
    theme: Theme,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Print the roots and exit instead of opening the UI
    #[arg(long)]
    print: bool,

    /// With --print, also print the worked steps
    #[arg(long, requires = "print")]
    steps: bool,

    /// With --print, also print the plot samples
    #[arg(long, requires = "print")]
    samples: bool,
}

impl Args {
    fn coefficient_texts(&self) -> (&str, &str, &str) {
        (
            self.a.as_deref().unwrap_or(""),
            self.b.as_deref().unwrap_or(""),
            self.c.as_deref().unwrap_or(""),
        )
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting quadratic");
    }

    if args.print {
        print_solution(&args);
        return Ok(());
    }

    let (a, b, c) = args.coefficient_texts();
    let app = App::new(InputForm::with_values(a, b, c), args.theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("quadratic exited");

    Ok(())
}

fn print_solution(args: &Args) {
    let (a, b, c) = args.coefficient_texts();
    let solution = match Solution::from_text(a, b, c) {
        Ok(solution) => solution,
        Err(err) => {
            tracing::warn!("Rejected coefficients: {}", err);
            eprintln!("Error: {}", err);
            std::process::exit(1);
        },
    };
    tracing::info!(
        discriminant = solution.roots().discriminant(),
        "Solved equation"
    );

    let roots = solution.roots();
    println!("Root 1: {}", format_complex(roots.root1()));
    println!("Root 2: {}", format_complex(roots.root2()));

    if args.steps {
        println!();
        for line in solution.steps() {
            println!("{}", line);
        }
    }

    if args.samples {
        println!();
        let series = solution.sample(&Default::default());
        for &(x, y) in series.points() {
            println!("{}\t{}", x, format_real(y));
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> quadratic::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Ignore release events on platforms that report them
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
