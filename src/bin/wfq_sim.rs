//! 公平排队调度仿真
//!
//! 读取 `到达时间 包长 流ID` 轨迹文件，按 FQ 或 WFQ 计算单条输出链路上的发送顺序与时间区间。

use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use wfq_sim::packet::{LinkSpeed, Time, read_trace};
use wfq_sim::queue::{ReceiveQueue, SendQueue};
use wfq_sim::report::ScheduleReport;
use wfq_sim::sched::{FairQueuing, FinishTime, Scheduler, WeightedFairQueuing};
use wfq_sim::stream::StreamConfiguration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Fair Queueing
    Fq,
    /// Weighted Fair Queueing
    Wfq,
}

#[derive(Debug, Parser)]
#[command(
    name = "wfq-sim",
    about = "Packet-based fair queueing scheduler simulation (FQ / WFQ)"
)]
struct Args {
    /// Trace file; each line is `arrival_time packet_length stream_id`
    file: PathBuf,

    /// Percentage of bandwidth assigned to each stream, comma separated. Ex: 50,10,40
    streams: String,

    /// Scheduling algorithm
    #[arg(long, value_enum, default_value_t = Algorithm::Wfq)]
    algorithm: Algorithm,

    /// Simulation start time (seconds)
    #[arg(long, default_value_t = 0.0)]
    initial_time: f64,

    /// Link service rate (size units per second)
    #[arg(long, default_value_t = 1.0)]
    link_speed: f64,

    /// Write the schedule report as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Default log level to debug instead of info (RUST_LOG still wins)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();
}

fn simulate<S: FinishTime>(
    strategy: S,
    recv: &mut ReceiveQueue,
    initial: Time,
    link_speed: LinkSpeed,
) -> wfq_sim::Result<(&'static str, SendQueue)> {
    let name = strategy.name();
    let scheduler = Scheduler::new(strategy).with_link_speed(link_speed);
    let send = scheduler.execute(recv, initial)?;
    Ok((name, send))
}

fn run(args: &Args) -> wfq_sim::Result<()> {
    let config = StreamConfiguration::from_percentages(&args.streams)?;
    let initial = Time::new(args.initial_time)?;
    let link_speed = LinkSpeed::new(args.link_speed)?;
    let mut recv = ReceiveQueue::from_packets(read_trace(&args.file)?);

    let (name, send) = match args.algorithm {
        Algorithm::Fq => simulate(FairQueuing, &mut recv, initial, link_speed)?,
        Algorithm::Wfq => simulate(
            WeightedFairQueuing::new(config),
            &mut recv,
            initial,
            link_speed,
        )?,
    };

    for (interval, pkt) in send.entries() {
        println!("packet={} stream={} {}", pkt, pkt.stream(), interval);
    }
    let order: Vec<String> = send.packet_order().iter().map(u64::to_string).collect();
    println!("order={}", order.join(","));

    if let Some(path) = &args.json {
        let report = ScheduleReport::new(name, initial, link_speed, &send);
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Something went wrong. Please check the error message below:\n{e}");
            ExitCode::FAILURE
        }
    }
}
