use std::io::Write;

use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hora_mexico::format::{day_name, format_date, format_time};
use hora_mexico::refresh::{AutoRefresh, REFRESH_PERIOD};
use hora_mexico::state::{Phase, TimeState};
use hora_mexico::time_client::{FetchOutcome, TimeClient};

/// Interactive terminal screen for the official Mexico City time.
///
/// Fetches once on startup and then every 30 seconds while auto-refresh is
/// on. An empty line (or `r`) refreshes manually, `a` toggles auto-refresh,
/// `q` exits. Fetch outcomes and keyboard input are multiplexed over one
/// select loop; the most recent completed fetch wins the screen.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = TimeClient::new();
    let (outcomes_tx, mut outcomes_rx) = mpsc::channel::<FetchOutcome>(8);
    let mut state = TimeState::default();

    // first load happens right away, before any command
    state.fetch_started();
    render(&state);
    spawn_fetch(&client, &outcomes_tx);

    // auto-refresh starts enabled
    let mut auto = Some(start_auto_refresh(&client, &outcomes_tx));
    info!("Auto-refresh enabled, period {:?}", REFRESH_PERIOD);

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    prompt()?;

    loop {
        tokio::select! {
            Some(outcome) = outcomes_rx.recv() => {
                state.fetch_finished(outcome);
                render(&state);
                prompt()?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break; // stdin closed
                };
                match line.trim() {
                    "q" | "exit" => break,
                    "" | "r" => {
                        if state.is_loading {
                            // one manual fetch at a time
                            println!("Ya hay una actualización en curso...");
                        } else {
                            state.fetch_started();
                            spawn_fetch(&client, &outcomes_tx);
                            println!("Actualizando...");
                        }
                        prompt()?;
                    }
                    "a" => {
                        match auto.take() {
                            Some(running) => {
                                running.stop();
                                println!("Auto: OFF");
                            }
                            None => {
                                auto = Some(start_auto_refresh(&client, &outcomes_tx));
                                println!("Auto: ON");
                            }
                        }
                        prompt()?;
                    }
                    other => {
                        println!(
                            "Comando no reconocido: {:?}. Usa [r] actualizar, [a] auto-refresh, [q] salir.",
                            other
                        );
                        prompt()?;
                    }
                }
            }
        }
    }

    if let Some(running) = auto.take() {
        running.stop();
    }
    info!("Exiting");
    Ok(())
}

/// Starts the 30-second refresh task; outcomes land in the same channel as
/// manual fetches, so completion order decides what the screen shows.
fn start_auto_refresh(client: &TimeClient, outcomes: &mpsc::Sender<FetchOutcome>) -> AutoRefresh {
    let client = client.clone();
    AutoRefresh::start(REFRESH_PERIOD, outcomes.clone(), move || {
        let client = client.clone();
        async move { client.fetch().await }
    })
}

/// Runs one manual fetch in the background and delivers its outcome.
fn spawn_fetch(client: &TimeClient, outcomes: &mpsc::Sender<FetchOutcome>) {
    let client = client.clone();
    let outcomes = outcomes.clone();
    tokio::spawn(async move {
        // a failed send only means the screen is shutting down
        let _ = outcomes.send(client.fetch().await).await;
    });
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

/// Redraws the whole card, dispatching on the derived phase.
fn render(state: &TimeState) {
    println!();
    println!("════════ Hora Oficial · Centro de México ════════");
    match state.phase() {
        Phase::Loading => {
            println!("Obteniendo hora oficial...");
        }
        Phase::Error => {
            println!("Error de Conexión");
            if let Some(error) = &state.error {
                println!("{}", error);
            }
            println!("Usa [r] para reintentar.");
        }
        Phase::Success => {
            if let Some(record) = &state.record {
                if state.is_loading {
                    println!("(actualizando...)");
                }
                println!("   {}", format_time(&record.datetime));
                println!("   {}", format_date(&record.datetime));
                println!("   {}", day_name(record.day_of_week));
                println!();
                println!("   Zona Horaria:      {}", record.timezone);
                println!("   UTC Offset:        {}", record.utc_offset);
                println!("   Abreviatura:       {}", record.abbreviation);
                println!("   Horario de Verano: {}", if record.dst { "Sí" } else { "No" });
                println!("   Semana del año:    {}", record.week_number);
            }
        }
    }
    println!("Fuente: WorldTimeAPI • Zona: America/Mexico_City");
}
