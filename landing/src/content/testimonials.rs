#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub position: &'static str,
    /// `-` when the reviewer did not name a company.
    pub company: &'static str,
    pub quote: &'static str,
}

impl Testimonial {
    /// The company suffix, hidden for placeholder values containing `-`.
    pub fn affiliation(&self) -> Option<&'static str> {
        (!self.company.contains('-')).then_some(self.company)
    }

    /// `position • company`, or just the position.
    pub fn byline(&self) -> String {
        match self.affiliation() {
            Some(company) => format!("{} • {}", self.position, company),
            None => self.position.to_string(),
        }
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Satoshi Yokota",
        position: "CEO",
        company: "classmethod.inc",
        quote: "에이전트 훅은 파일 저장에 대한 테스트 실행부터 보안 취약성에 대한 종속성 확인까지 수많은 반복적인 작업을 자동화하는 데 도움이 되었습니다.",
    },
    Testimonial {
        name: "Vivek Velso",
        position: "Cloud Engineering Lead",
        company: "-",
        quote: "막연한 아이디어를 구체적이고 실행 가능한 요구사항으로 전환하여 일관된 개발 환경을 만드는 데 도움이 되었습니다.",
    },
    Testimonial {
        name: "Sathiesh Veera",
        position: "Principal Software Engineer",
        company: "-",
        quote: "단 네 줄의 스펙으로, Kiro는 제품 관리자처럼 사용자 스토리를 작성하고, 언급되지 않은 많은 세부사항들을 확인할 수 있어 며칠 동안의 작업을 절약해 주었습니다.",
    },
    Testimonial {
        name: "Ihor Sasovets",
        position: "Lead Security Engineer, Penetration Tester",
        company: "TechMagic",
        quote: "보안 요구사항을 Kiro에 공유했더니 추가적인 프롬프트 없이 암호화와 다양한 보안 코딩 방식을 사용해 취약점 및 안전하지 않은 세션 핸들링을 방지하는 완전히 안전한 애플리케이션을 구축할 수 있었습니다.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_hides_company() {
        assert_eq!(TESTIMONIALS[0].byline(), "CEO • classmethod.inc");
        assert_eq!(TESTIMONIALS[1].affiliation(), None);
        assert_eq!(TESTIMONIALS[1].byline(), "Cloud Engineering Lead");
    }

    #[test]
    fn hyphenated_company_names_are_hidden_too() {
        let t = Testimonial {
            company: "acme-labs",
            ..TESTIMONIALS[0]
        };
        assert_eq!(t.affiliation(), None);
    }
}
