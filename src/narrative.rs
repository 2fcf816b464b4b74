use std::borrow::Cow;

pub struct NarrativeEntry {
    pub first: &'static str,
    pub second: &'static str,
    pub text: &'static str,
}

/// Curated interpretations, keyed by the ordered (first, second) pair.
pub const NARRATIVES: &[NarrativeEntry] = &[
    NarrativeEntry {
        first: "주인",
        second: "오너",
        text: "'주인'과 '오너'의 연어 분석 결과를 보면 흥미로운 사용 패턴의 차이를 발견할 수 있다:

- '주인'은 '집의', '가게의', '애완동물의'와 같은 소유 관계를 나타내는 표현과 함께 사용되는 경향이 있다. 이는 '주인'이 전통적인 소유의 의미로 사용되고 있음을 보여준다.

- 반면 '오너'는 '리스크', '베네핏', '시스템'과 같은 비즈니스 관련 용어와 함께 사용되는 경향이 있다. 이는 '오너'가 주로 경영 및 비즈니스 맥락에서 사용되고 있음을 보여준다.

이러한 차이는 두 단어가 비슷한 의미를 가지고 있지만, 사용되는 문맥이 다르다는 것을 보여준다. '오너'는 비즈니스 및 경제 분야에서 특화된 의미로 사용되고 있으며, 이는 외래어 사용의 주요 동기 중 하나인 '특정 분야에서의 전문성 강조'를 반영한다.",
    },
    NarrativeEntry {
        first: "아름다움",
        second: "뷰티",
        text: "'아름다움'과 '뷰티'의 연어 분석 결과를 보면:

- '아름다움'은 '내면의', '자연의', '한국적', '예술적', '순수한'과 같은 추상적이고 정서적인 표현과 함께 사용되는 경향이 있다. 이는 '아름다움'이 더 철학적이고 본질적인 의미로 사용되고 있음을 보여준다.

- 반면 '뷰티'는 '아이템', '제품', '트렌드', '에디터', '유튜버'와 같은 산업 및 상업적 용어와 함께 사용되는 경향이 있다. 이는 '뷰티'가 주로 화장품, 미용 산업, 트렌드와 관련된 맥락에서 사용되고 있음을 보여준다.

이러한 차이는 '뷰티'가 '아름다움'보다 더 특정한 산업 분야를 지칭하는 데 사용되고 있음을 보여준다. 이는 외래어가 특정 분야나 산업에서 더 선호되는 경향을 반영한다.",
    },
    NarrativeEntry {
        first: "꽃",
        second: "플라워",
        text: "'꽃'과 '플라워'의 연어 분석 결과를 보면:

- '꽃'은 '예쁜', '들판의', '봄', '꽃잎', '향기로운'과 같은 자연적이고 감각적인 표현과 함께 사용되는 경향이 있다. 이는 '꽃'이 자연 그대로의 식물을 지칭하는 데 주로 사용됨을 보여준다.

- 반면 '플라워'는 '이벤트', '샵', '박스', '디자인', '브리딩'과 같은 상업 및 디자인 관련 용어와 함께 사용되는 경향이 있다. 이는 '플라워'가 꽃을 활용한 상품이나 서비스를 지칭하는 데 주로 사용됨을 나타낸다.

이러한 차이는 '플라워'가 '꽃'과 의미는 유사하지만, 주로 상업적이고 전문적인 맥락에서 사용되고 있음을 보여준다. 외래어 '플라워'는 화훼 산업이나 플라워 디자인과 같은 특정 분야에서 더 전문적인 어감을 주기 위해 선택되는 것으로 보인다.",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narrative<'a> {
    Curated(&'static str),
    Generic { first: &'a str, second: &'a str },
}

impl<'a> Narrative<'a> {
    pub fn is_curated(&self) -> bool {
        matches!(self, Narrative::Curated(_))
    }

    pub fn text(&self) -> Cow<'static, str> {
        match self {
            Narrative::Curated(text) => Cow::Borrowed(*text),
            Narrative::Generic { first, second } => Cow::Owned(format!(
                "'{first}'와(과) '{second}'의 연어 분석 결과를 보면 두 단어의 사용 맥락에 차이가 있음을 알 수 있다.

각 단어가 주로 어떤 단어들과 함께 사용되는지 살펴보면, 단어 선택의 동기와 의도를 추론할 수 있다.
외래어는 종종 특정 분야나 맥락에서 더 전문적이거나 세련된 느낌을 주기 위해 선택되는 경향이 있다."
            )),
        }
    }
}

/// Exact match on the ordered pair; anything else gets the generic paragraph.
pub fn select_narrative<'a>(first: &'a str, second: &'a str) -> Narrative<'a> {
    NARRATIVES
        .iter()
        .find(|entry| entry.first == first && entry.second == second)
        .map(|entry| Narrative::Curated(entry.text))
        .unwrap_or(Narrative::Generic { first, second })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    #[test]
    fn owner_pair_contrasts_ownership_and_business() {
        let narrative = select_narrative("주인", "오너");
        assert!(narrative.is_curated());
        let text = narrative.text();
        assert!(text.contains("소유 관계"));
        assert!(text.contains("비즈니스 관련 용어"));
    }

    #[test]
    fn curated_pairs_are_found() {
        assert!(select_narrative("아름다움", "뷰티").text().contains("산업 및 상업적 용어"));
        assert!(select_narrative("꽃", "플라워").text().contains("화훼 산업"));
    }

    #[test]
    fn unmatched_pair_names_both_words() {
        let narrative = select_narrative("꽃", "아름다움");
        assert_eq!(narrative, Narrative::Generic { first: "꽃", second: "아름다움" });
        let text = narrative.text();
        assert!(text.starts_with("'꽃'와(과) '아름다움'의 연어 분석 결과"));
    }

    #[test]
    fn lookup_is_order_sensitive() {
        assert!(!select_narrative("오너", "주인").is_curated());
        assert!(!select_narrative("플라워", "꽃").is_curated());
    }

    #[test]
    fn every_other_pair_gets_the_fallback() {
        let words = Lexicon::builtin().sorted_words();
        for first in &words {
            for second in &words {
                let narrative = select_narrative(first, second);
                let curated = NARRATIVES
                    .iter()
                    .any(|e| e.first == first.as_str() && e.second == second.as_str());
                assert_eq!(narrative.is_curated(), curated);
                if !curated {
                    let text = narrative.text();
                    assert!(text.contains(&format!("'{first}'")));
                    assert!(text.contains(&format!("'{second}'")));
                }
            }
        }
    }
}
