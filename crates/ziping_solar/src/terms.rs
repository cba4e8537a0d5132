//! The 24 solar terms and their civil moments.
//!
//! Term order starts at Xiaohan (Slight Cold) so that all 24 fall inside
//! one civil year; the target apparent longitude of term i is
//! (285 + 15*i) mod 360. Even indices are the Jie terms that pivot month
//! branches; odd indices are the mid-month Qi terms.

use ziping_time::{CivilTime, calendar_to_jd};

use crate::delta_t::delta_t_seconds;
use crate::error::SolarError;
use crate::sun::{MEAN_MOTION_DEG_PER_DAY, apparent_solar_longitude, normalize_360, normalize_pm180};

/// First supported civil year.
pub const MIN_YEAR: i32 = 1900;

/// Last supported civil year.
pub const MAX_YEAR: i32 = 2100;

/// Newton tolerance on the longitude residual, about a tenth of a second
/// of time.
const TOLERANCE_DEG: f64 = 1e-6;

/// Iteration cap; the solver needs 3-4 steps in practice.
const MAX_ITERATIONS: usize = 16;

/// The 24 solar terms in civil-year order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarTerm {
    XiaoHan,
    DaHan,
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
}

/// All 24 terms in order (index 0 = Xiaohan).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
];

impl SolarTerm {
    /// Pinyin name of the term.
    pub const fn name(self) -> &'static str {
        match self {
            Self::XiaoHan => "Xiaohan",
            Self::DaHan => "Dahan",
            Self::LiChun => "Lichun",
            Self::YuShui => "Yushui",
            Self::JingZhe => "Jingzhe",
            Self::ChunFen => "Chunfen",
            Self::QingMing => "Qingming",
            Self::GuYu => "Guyu",
            Self::LiXia => "Lixia",
            Self::XiaoMan => "Xiaoman",
            Self::MangZhong => "Mangzhong",
            Self::XiaZhi => "Xiazhi",
            Self::XiaoShu => "Xiaoshu",
            Self::DaShu => "Dashu",
            Self::LiQiu => "Liqiu",
            Self::ChuShu => "Chushu",
            Self::BaiLu => "Bailu",
            Self::QiuFen => "Qiufen",
            Self::HanLu => "Hanlu",
            Self::ShuangJiang => "Shuangjiang",
            Self::LiDong => "Lidong",
            Self::XiaoXue => "Xiaoxue",
            Self::DaXue => "Daxue",
            Self::DongZhi => "Dongzhi",
        }
    }

    /// English name of the term.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::XiaoHan => "Slight Cold",
            Self::DaHan => "Great Cold",
            Self::LiChun => "Start of Spring",
            Self::YuShui => "Rain Water",
            Self::JingZhe => "Awakening of Insects",
            Self::ChunFen => "Spring Equinox",
            Self::QingMing => "Clear and Bright",
            Self::GuYu => "Grain Rain",
            Self::LiXia => "Start of Summer",
            Self::XiaoMan => "Grain Buds",
            Self::MangZhong => "Grain in Ear",
            Self::XiaZhi => "Summer Solstice",
            Self::XiaoShu => "Slight Heat",
            Self::DaShu => "Great Heat",
            Self::LiQiu => "Start of Autumn",
            Self::ChuShu => "End of Heat",
            Self::BaiLu => "White Dew",
            Self::QiuFen => "Autumn Equinox",
            Self::HanLu => "Cold Dew",
            Self::ShuangJiang => "Frost Descent",
            Self::LiDong => "Start of Winter",
            Self::XiaoXue => "Slight Snow",
            Self::DaXue => "Great Snow",
            Self::DongZhi => "Winter Solstice",
        }
    }

    /// Hanzi for the term.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::XiaoHan => "小寒",
            Self::DaHan => "大寒",
            Self::LiChun => "立春",
            Self::YuShui => "雨水",
            Self::JingZhe => "惊蛰",
            Self::ChunFen => "春分",
            Self::QingMing => "清明",
            Self::GuYu => "谷雨",
            Self::LiXia => "立夏",
            Self::XiaoMan => "小满",
            Self::MangZhong => "芒种",
            Self::XiaZhi => "夏至",
            Self::XiaoShu => "小暑",
            Self::DaShu => "大暑",
            Self::LiQiu => "立秋",
            Self::ChuShu => "处暑",
            Self::BaiLu => "白露",
            Self::QiuFen => "秋分",
            Self::HanLu => "寒露",
            Self::ShuangJiang => "霜降",
            Self::LiDong => "立冬",
            Self::XiaoXue => "小雪",
            Self::DaXue => "大雪",
            Self::DongZhi => "冬至",
        }
    }

    /// 0-based index in civil-year order (Xiaohan=0 .. Dongzhi=23).
    pub const fn index(self) -> u8 {
        match self {
            Self::XiaoHan => 0,
            Self::DaHan => 1,
            Self::LiChun => 2,
            Self::YuShui => 3,
            Self::JingZhe => 4,
            Self::ChunFen => 5,
            Self::QingMing => 6,
            Self::GuYu => 7,
            Self::LiXia => 8,
            Self::XiaoMan => 9,
            Self::MangZhong => 10,
            Self::XiaZhi => 11,
            Self::XiaoShu => 12,
            Self::DaShu => 13,
            Self::LiQiu => 14,
            Self::ChuShu => 15,
            Self::BaiLu => 16,
            Self::QiuFen => 17,
            Self::HanLu => 18,
            Self::ShuangJiang => 19,
            Self::LiDong => 20,
            Self::XiaoXue => 21,
            Self::DaXue => 22,
            Self::DongZhi => 23,
        }
    }

    /// Create from raw u8 index.
    pub fn from_u8(v: u8) -> Option<Self> {
        if (v as usize) < ALL_SOLAR_TERMS.len() {
            Some(ALL_SOLAR_TERMS[v as usize])
        } else {
            None
        }
    }

    /// Target apparent solar longitude of the term in degrees.
    pub const fn target_longitude_deg(self) -> f64 {
        ((285 + 15 * self.index() as u32) % 360) as f64
    }

    /// Whether the term is a Jie (month pivot). Even indices are Jie,
    /// odd indices are the mid-month Qi.
    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// Month-branch index (0 = Zi) opened by this term; None for Qi terms.
    pub const fn month_branch_index(self) -> Option<u8> {
        if self.is_jie() {
            // Xiaohan opens the Chou month; each later Jie advances one
            // branch; Daxue wraps to Zi.
            Some((self.index() / 2 + 1) % 12)
        } else {
            None
        }
    }
}

/// One solar term with its civil moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermMoment {
    pub term: SolarTerm,
    /// Civil moment, UTC+8, rounded to the whole minute.
    pub time: CivilTime,
    /// Civil Julian Date of `time`, for interval arithmetic.
    pub jd: f64,
}

/// Computes solar-term tables for civil years.
///
/// Stateless and copyable; the resolver takes one of these as an explicit
/// argument rather than reaching into shared state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolarTermCalculator;

impl SolarTermCalculator {
    pub fn new() -> Self {
        Self
    }

    /// The 24 term moments of a civil year, in order.
    pub fn terms_for_year(&self, year: i32) -> Result<[TermMoment; 24], SolarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(SolarError::UnsupportedYear(year));
        }
        Ok(std::array::from_fn(|i| {
            term_moment(year, ALL_SOLAR_TERMS[i])
        }))
    }
}

/// Invert the solar longitude to the moment of one term.
///
/// Newton iteration on the mean motion from a mean-longitude initial guess;
/// the residual function is monotonic at ~1 deg/day, so a handful of steps
/// reaches the tolerance. Non-convergence inside the supported range is a
/// defect, not a runtime condition.
fn term_moment(year: i32, term: SolarTerm) -> TermMoment {
    let target = term.target_longitude_deg();

    let jd0 = calendar_to_jd(year, 1, 1.0);
    let mut jd = jd0 + normalize_360(target - apparent_solar_longitude(jd0)) / MEAN_MOTION_DEG_PER_DAY;

    let mut residual = normalize_pm180(target - apparent_solar_longitude(jd));
    for _ in 0..MAX_ITERATIONS {
        if residual.abs() < TOLERANCE_DEG {
            break;
        }
        jd += residual / MEAN_MOTION_DEG_PER_DAY;
        residual = normalize_pm180(target - apparent_solar_longitude(jd));
    }
    assert!(
        residual.abs() < TOLERANCE_DEG,
        "solar-term inversion did not converge: {} {}",
        year,
        term.name()
    );

    // TT -> UTC via ΔT, then shift to UTC+8 and round to the whole minute.
    let decimal_year = year as f64 + (term.index() as f64 + 0.5) / 24.0;
    let jd_civil = jd - delta_t_seconds(decimal_year) / 86_400.0 + 8.0 / 24.0;
    let jd_civil = (jd_civil * 1440.0).round() / 1440.0;

    TermMoment {
        term,
        time: CivilTime::from_jd(jd_civil),
        jd: jd_civil,
    }
}
