//! gnuplot 控制文件输出
//!
//! 把绘图清单写成 gnuplot 可直接执行的 .plt 文本：png 终端、
//! 标题与坐标轴设置、xrange，以及三个内联 `"-"` 数据块（各以
//! `e` 结尾）。图像渲染本身交给外部 gnuplot。

use super::PlotManifest;
use std::io::{self, Write};

pub fn write_plt<W: Write>(
    w: &mut W,
    manifest: &PlotManifest,
    graphics_file: &str,
) -> io::Result<()> {
    writeln!(w, "set terminal png")?;
    writeln!(w, "set output \"{graphics_file}\"")?;
    writeln!(w, "set title \"{}\"", manifest.title)?;
    writeln!(w, "set xlabel \"{}\"", manifest.x_label)?;
    writeln!(w, "set ylabel \"{}\"", manifest.y_label)?;
    writeln!(
        w,
        "set xrange [{}:{}]",
        manifest.x_range.0, manifest.x_range.1
    )?;

    let plots = manifest
        .series
        .iter()
        .map(|s| format!("\"-\"  title \"{}\" with linespoints", s.label))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(w, "plot {plots}")?;

    for s in &manifest.series {
        for p in &s.points {
            writeln!(w, "{} {}", p.x, p.y)?;
        }
        writeln!(w, "e")?;
    }
    Ok(())
}
