// Headline figures quoted in the report narrative
use lazy_static::lazy_static;
use regex::Regex;
use report_types::disclosure::parse_count;

lazy_static! {
    static ref NEW_RECEIVED: Regex = Regex::new(r"本年(?:度)?新收.*?(\d[\d,]*)\s*件").unwrap();
    static ref CARRIED_OVER: Regex = Regex::new(r"上年结转.*?(\d[\d,]*)\s*件").unwrap();
    static ref TOTAL_APPLICATIONS: Regex =
        Regex::new(r"(?:共计?|合计)?收到.*?(?:政府信息公开|政务公开)?申请.*?(\d[\d,]*)\s*件").unwrap();
    static ref CARRIED_FORWARD: Regex =
        Regex::new(r"结转下年度(?:继续办理)?.*?(\d[\d,]*)\s*件").unwrap();
    /// Stops at clause punctuation so a later figure is not picked up
    static ref REVIEW_TOTAL: Regex = Regex::new(r"行政复议[^，。、；]*?(\d[\d,]*)\s*件").unwrap();
    static ref LITIGATION_TOTAL: Regex = Regex::new(r"行政诉讼[类案件]{0,10}?(\d[\d,]*)\s*件").unwrap();
}

/// A figure the narrative states and a table also reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlineFigure {
    NewReceived,
    CarriedOver,
    TotalApplications,
    CarriedForward,
    ReviewTotal,
    LitigationTotal,
}

impl HeadlineFigure {
    pub const ALL: [HeadlineFigure; 6] = [
        HeadlineFigure::NewReceived,
        HeadlineFigure::CarriedOver,
        HeadlineFigure::TotalApplications,
        HeadlineFigure::CarriedForward,
        HeadlineFigure::ReviewTotal,
        HeadlineFigure::LitigationTotal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HeadlineFigure::NewReceived => "本年新收",
            HeadlineFigure::CarriedOver => "上年结转",
            HeadlineFigure::TotalApplications => "收到申请总量",
            HeadlineFigure::CarriedForward => "结转下年度",
            HeadlineFigure::ReviewTotal => "行政复议总计",
            HeadlineFigure::LitigationTotal => "行政诉讼总计",
        }
    }

    /// Whether the figure lives in the review and litigation table
    pub fn is_dispute_figure(self) -> bool {
        matches!(
            self,
            HeadlineFigure::ReviewTotal | HeadlineFigure::LitigationTotal
        )
    }

    fn pattern(self) -> &'static Regex {
        match self {
            HeadlineFigure::NewReceived => &*NEW_RECEIVED,
            HeadlineFigure::CarriedOver => &*CARRIED_OVER,
            HeadlineFigure::TotalApplications => &*TOTAL_APPLICATIONS,
            HeadlineFigure::CarriedForward => &*CARRIED_FORWARD,
            HeadlineFigure::ReviewTotal => &*REVIEW_TOTAL,
            HeadlineFigure::LitigationTotal => &*LITIGATION_TOTAL,
        }
    }

    /// The stated count and the matched phrase, if `text` mentions this figure
    ///
    /// Counts may carry thousands separators or full-width digits.
    pub fn find_in(self, text: &str) -> Option<(f64, &str)> {
        let caps = self.pattern().captures(text)?;
        let phrase = caps.get(0)?.as_str();
        let value = parse_count(caps.get(1)?.as_str())?;
        Some((value, phrase))
    }
}
