//! Prometheus text exposition writer.
//!
//! Families are appended in call order, each rendered as `# HELP`, `# TYPE`,
//! its samples, and separated from the previous family by one blank line.
//! Values are written with their `Display` impl, so integers stay integral
//! and `f64` never switches to exponent notation.

use std::fmt::{Display, Write};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// HELP text only escapes backslash and newline.
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
    Histogram,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
            MetricKind::Histogram => "histogram",
        }
    }
}

/// One cumulative histogram bucket. `le` is kept as text so `+Inf` and
/// integral bounds render exactly as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub le: &'static str,
    pub count: u64,
}

impl Bucket {
    pub const fn new(le: &'static str, count: u64) -> Self {
        Self { le, count }
    }
}

/// Append-only exposition document.
#[derive(Debug, Default)]
pub struct Exposition {
    out: String,
    families: usize,
}

impl Exposition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gauge(&mut self, name: &str, help: &str, value: impl Display) -> &mut Self {
        self.header(name, help, MetricKind::Gauge);
        self.sample(name, &[], value);
        self
    }

    pub fn counter(&mut self, name: &str, help: &str, value: impl Display) -> &mut Self {
        self.header(name, help, MetricKind::Counter);
        self.sample(name, &[], value);
        self
    }

    /// Write a histogram family. Buckets must already be cumulative and end
    /// with `+Inf`; they are emitted in the order given.
    pub fn histogram(
        &mut self,
        name: &str,
        help: &str,
        buckets: &[Bucket],
        sum: impl Display,
        count: u64,
    ) -> &mut Self {
        self.header(name, help, MetricKind::Histogram);
        let bucket_name = format!("{name}_bucket");
        for b in buckets {
            self.sample(&bucket_name, &[("le", b.le)], b.count);
        }
        self.sample(&format!("{name}_sum"), &[], sum);
        self.sample(&format!("{name}_count"), &[], count);
        self
    }

    fn header(&mut self, name: &str, help: &str, kind: MetricKind) {
        if self.families > 0 {
            self.out.push('\n');
        }
        self.families += 1;
        let _ = writeln!(self.out, "# HELP {} {}", name, escape_help(help));
        let _ = writeln!(self.out, "# TYPE {} {}", name, kind.as_str());
    }

    fn sample(&mut self, name: &str, labels: &[(&str, &str)], value: impl Display) {
        if labels.is_empty() {
            let _ = writeln!(self.out, "{} {}", name, value);
            return;
        }
        let label_str = labels
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
            .collect::<Vec<_>>()
            .join(",");
        let _ = writeln!(self.out, "{}{{{}}} {}", name, label_str, value);
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_are_blank_line_separated() {
        let mut e = Exposition::new();
        e.gauge("a", "first", 1).counter("b_total", "second", 2);
        assert_eq!(
            e.finish(),
            "# HELP a first\n# TYPE a gauge\na 1\n\n# HELP b_total second\n# TYPE b_total counter\nb_total 2\n"
        );
    }

    #[test]
    fn histogram_renders_buckets_sum_and_count() {
        let mut e = Exposition::new();
        e.histogram(
            "lat_seconds",
            "Latency",
            &[Bucket::new("1", 3), Bucket::new("+Inf", 4)],
            7.5,
            4,
        );
        let text = e.finish();
        assert!(text.contains("# TYPE lat_seconds histogram\n"));
        assert!(text.contains("lat_seconds_bucket{le=\"1\"} 3\n"));
        assert!(text.contains("lat_seconds_bucket{le=\"+Inf\"} 4\n"));
        assert!(text.contains("lat_seconds_sum 7.5\n"));
        assert!(text.ends_with("lat_seconds_count 4\n"));
    }

    #[test]
    fn escapes_label_and_help_text() {
        assert_eq!(escape_label("a\"b\\c\nd"), "a\\\"b\\\\c\\nd");
        assert_eq!(escape_help("x\\y\nz"), "x\\\\y\\nz");
    }
}
