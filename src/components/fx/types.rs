//! Skill table input for the radar chart.

use serde::Deserialize;

/// One self-rated skill.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
	/// Chinese label.
	pub name_zh: String,
	/// English label.
	pub name_en: String,
	/// Rating on the chart's 0..=10 scale. Out-of-range values are clamped.
	pub value: f64,
}

impl Skill {
	/// A skill with both labels.
	pub fn new(name_zh: &str, name_en: &str, value: f64) -> Self {
		Self {
			name_zh: name_zh.into(),
			name_en: name_en.into(),
			value,
		}
	}
}

/// Ordered skill table; order fixes each skill's axis.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SkillTable {
	/// Skills in axis order, starting at the top.
	pub skills: Vec<Skill>,
}

impl Default for SkillTable {
	fn default() -> Self {
		Self {
			skills: vec![
				Skill::new("AI产品设计", "AI Product Design", 8.0),
				Skill::new("需求挖掘", "Requirements Mining", 9.0),
				Skill::new("数据驱动", "Data Driven", 7.0),
				Skill::new("技术认知", "Technical Cognition", 8.0),
				Skill::new("业务分析", "Business Analysis", 8.0),
				Skill::new("项目管理", "Project Management", 7.0),
			],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_table_has_six_skills() {
		let table = SkillTable::default();
		assert_eq!(table.skills.len(), 6);
		assert_eq!(table.skills[1].name_en, "Requirements Mining");
		assert_eq!(table.skills[1].value, 9.0);
	}

	#[test]
	fn parses_camel_case_json() {
		let json = r#"{ "skills": [ { "nameZh": "写作", "nameEn": "Writing", "value": 6 } ] }"#;
		let table: SkillTable = serde_json::from_str(json).unwrap();
		assert_eq!(table.skills, vec![Skill::new("写作", "Writing", 6.0)]);
	}
}
