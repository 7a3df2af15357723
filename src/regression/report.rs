// Text summary of a fitted model, laid out like R's `summary.lm`

use crate::regression::estimator::FittedModel;
use crate::regression::metrics::ParameterMetrics;

impl FittedModel {
    /// Generate human-readable report
    pub fn to_report_string(&self) -> String {
        let prec = self.precision as usize;
        let mut report = String::new();

        report.push_str("📈 SIMPLE LINEAR REGRESSION\n\n");
        report.push_str(&format!("Observations: {}\n\n", self.sample_size));

        report.push_str("Coefficients:\n");
        report.push_str(&format!(
            "{:<12} {:>12} {:>12} {:>12} {:>12}\n",
            "", "Estimate", "Std. Error", "t value", "Pr(>|t|)"
        ));
        push_parameter_row(
            &mut report,
            "(Intercept)",
            &self.coefficient_metrics.intercept,
            prec,
        );
        push_parameter_row(&mut report, "x", &self.coefficient_metrics.coefficient, prec);

        let metrics = &self.model_metrics;
        report.push_str(&format!(
            "\nResidual standard error: {:.prec$} on {} degrees of freedom\n",
            metrics.rse,
            self.sample_size.saturating_sub(2),
        ));
        report.push_str(&format!(
            "Multiple R-squared: {:.prec$},  Adjusted R-squared: {:.prec$}\n",
            metrics.r2, metrics.adj_r2,
        ));

        report
    }
}

fn push_parameter_row(report: &mut String, label: &str, metrics: &ParameterMetrics, prec: usize) {
    report.push_str(&format!(
        "{:<12} {:>12.prec$} {:>12.prec$} {:>12.prec$} {:>12.prec$}\n",
        label, metrics.estimate, metrics.std_error, metrics.t_statistic, metrics.p_value,
    ));
}
