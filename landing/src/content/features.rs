use super::ById;

/// A headline feature with its detail sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub details: &'static str,
    pub examples: &'static [&'static str],
    /// Demo screenshot shown at the bottom of the detail sheet.
    pub illustration: Option<&'static str>,
}

impl Feature {
    /// Accessible label for the card button.
    pub fn aria_label(&self) -> String {
        format!("{} 기능 상세보기", self.title)
    }
}

impl ById for Feature {
    fn id(&self) -> &'static str {
        self.id
    }

    fn all() -> &'static [Self] {
        FEATURES
    }
}

pub const FEATURES: &[Feature] = &[
    Feature {
        id: "spec-management",
        title: "Spec 기반 프로젝트 관리",
        description: "단순한 프롬프트 입력만으로도 요구사항, 시스템 디자인, 개발 작업으로 이어지는 전체 개발 과정을 명확하게 구조화하고 전환",
        icon: "📋",
        details: "복잡하고 막연한 아이디어를 입력하면, 키로가 곧바로 구체적인 요구사항, 시스템 디자인, 개발 작업으로 명확하게 정리해줍니다. 여러 단계로 나뉘는 작업을 명확히 보여줌으로써 프로젝트의 흐름을 한눈에 파악할 수 있게 합니다.",
        examples: &[
            "사용자 인증 시스템 → 로그인 폼, 회원가입, 비밀번호 재설정으로 자동 분할.",
            "쇼핑몰 프로젝트 → 상품 목록, 장바구니, 결제 시스템으로 단계별 구현.",
            "블로그 시스템 → 글 작성, 댓글, 검색 기능으로 체계적 개발.",
        ],
        illustration: Some("/assets/spec-management-demo.png"),
    },
    Feature {
        id: "visual-hooks",
        title: "에이전트 Hook",
        description: "코드 저장과 동시에 문서화, 테스트, 최적화까지 자동화까지",
        icon: "🔗",
        details: "일상 언어로 필요한 자동화 작업을 GUI로 쉽게 추가해, 반복적인 작업은 KIRO에게 위임 할 수 있습니다.",
        examples: &[
            "오류 리포트 자동 생성: 특정 에러 발생 시, 어떤 문제가 발생하고 해결했는지를 포함하는 Markdown 형식 리포트 파일 생성.",
            "주석 및 문서 자동화: 컴포넌트의 props나 내부 동작에 대한 JSDoc 주석을 자동으로 생성하도록 설정.",
        ],
        illustration: Some("/assets/visual-hooks-demo.png"),
    },
    Feature {
        id: "natural-language",
        title: "고급 컨텍스트 관리",
        description: "MCP, HOOKS, SPECS, STEERING 모든 관리를 GUI로 한 눈에 제어",
        icon: "💬",
        details: "기획 문서, 디자인 시안, API 명세서 등 흩어져 있는 자료를 하나의 프로젝트 파일로 연결하고, 손으로 그린 스케치 같은 아이디어를 개발 가이드라인으로 만들어 줍니다.",
        examples: &[
            "네이티브MCP 통합을 통해 문서,데이터베이스, API 등에 연결.",
            "각 프로젝트의 스티어링 파일을 통해 Kiro 에이전트가 상호작용하는 방식을 설정.",
            "UI 디자인 이미지나 아키텍처 화이트보드 세션의 사진을 전달하면, Kiro가 이를 사용하여 구현을 안내.",
        ],
        illustration: Some("/assets/natural-language-demo.png"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_feature_has_examples() {
        assert_eq!(FEATURES.len(), 3);
        assert!(FEATURES.iter().all(|f| !f.examples.is_empty()));
    }

    #[test]
    fn aria_label_names_the_feature() {
        assert_eq!(FEATURES[1].aria_label(), "에이전트 Hook 기능 상세보기");
    }
}
