//! up2down 容量扫描实验
//!
//! 固定接入蜂窝拓扑（两条上行加一条下行），扫描有线链路容量，
//! 把逐流吞吐量随容量的变化写成 gnuplot 数据文件。

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use wlansweep_rs::agg::ResultAggregator;
use wlansweep_rs::demo::AccessLinkModel;
use wlansweep_rs::plot::{build_manifest, write_plt, ExportOpts};
use wlansweep_rs::sweep::{run_sweep, SweepSpec};

#[derive(Debug, Parser)]
#[command(
    name = "up2down",
    about = "容量扫描实验：两上行一下行三条流，吞吐量 vs 有线链路容量"
)]
struct Args {
    /// 扫描起始容量（kbps）
    #[arg(long, default_value_t = 1.0)]
    start_kbps: f64,

    /// 扫描步长（kbps）
    #[arg(long, default_value_t = 250.0)]
    step_kbps: f64,

    /// 扫描步数
    #[arg(long, default_value_t = 9)]
    steps: usize,

    /// 输出文件基名：写 <base>.plt，其中图像文件名为 <base>.png
    #[arg(long, default_value = "up2down1")]
    out_base: String,

    /// 图标题
    #[arg(long, default_value = "Throughput vs. datarate")]
    title: String,

    /// 额外输出 JSON 格式的绘图清单；不填则不生成
    #[arg(long)]
    manifest_json: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let spec = SweepSpec {
        start: args.start_kbps,
        step: args.step_kbps,
        count: args.steps,
    };

    let mut adapter = AccessLinkModel::default();
    let mut agg = ResultAggregator::default();
    run_sweep(&spec, &mut adapter, &mut agg).unwrap_or_else(|err| panic!("sweep failed: {err}"));

    let opts = ExportOpts {
        title: args.title,
        ..ExportOpts::default()
    };
    let manifest = build_manifest(&spec, agg.snapshot(), &opts);

    let plot_file = PathBuf::from(format!("{}.plt", args.out_base));
    let graphics_file = format!("{}.png", args.out_base);
    let mut buf = Vec::new();
    write_plt(&mut buf, &manifest, &graphics_file).expect("serialize plt");
    fs::write(&plot_file, &buf).unwrap_or_else(|_| panic!("write {}", plot_file.display()));
    eprintln!("wrote plot file to {}", plot_file.display());

    if let Some(path) = args.manifest_json {
        let json = serde_json::to_string_pretty(&manifest).expect("serialize manifest");
        fs::write(&path, json).unwrap_or_else(|_| panic!("write {}", path.display()));
        eprintln!("wrote manifest to {}", path.display());
    }

    println!(
        "done: steps={}, xrange=[{}:{}]",
        agg.len(),
        manifest.x_range.0,
        manifest.x_range.1
    );
}
