//! Bundled homepage copy. Rich-text fields are markdown.

use super::model::SectionId;

/// Text with a required English value and an optional Polish translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: &'static str,
    pub pl: Option<&'static str>,
}

impl LocalizedText {
    pub const fn both(en: &'static str, pl: &'static str) -> Self {
        Self { en, pl: Some(pl) }
    }

    pub const fn en(en: &'static str) -> Self {
        Self { en, pl: None }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogMedia {
    pub background_image: Option<&'static str>,
    pub section_image: Option<&'static str>,
    pub logo: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogItem {
    pub title: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
    pub additional_text: Option<LocalizedText>,
    pub role: Option<LocalizedText>,
    pub image: Option<&'static str>,
}

impl CatalogItem {
    const fn titled(title: LocalizedText, description: LocalizedText) -> Self {
        Self {
            title: Some(title),
            description: Some(description),
            additional_text: None,
            role: None,
            image: None,
        }
    }

    const fn slide(title: LocalizedText, description: LocalizedText, additional: LocalizedText) -> Self {
        Self {
            title: Some(title),
            description: Some(description),
            additional_text: Some(additional),
            role: None,
            image: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub section: SectionId,
    pub title: LocalizedText,
    pub subtitle: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
    pub additional_content: Option<LocalizedText>,
    pub cta_text: Option<LocalizedText>,
    pub media: CatalogMedia,
    pub carousel_items: &'static [CatalogItem],
    pub show_section: bool,
    pub order: f64,
}

impl CatalogEntry {
    const fn new(section: SectionId, title: LocalizedText, order: f64) -> Self {
        Self {
            section,
            title,
            subtitle: None,
            description: None,
            additional_content: None,
            cta_text: None,
            media: CatalogMedia {
                background_image: None,
                section_image: None,
                logo: None,
            },
            carousel_items: &[],
            show_section: true,
            order,
        }
    }
}

/// A media file bundled with the site, registered in the `media`
/// collection by the seeder.
#[derive(Debug, Clone, Copy)]
pub struct MediaFile {
    pub filename: &'static str,
    pub alt: &'static str,
    pub description: &'static str,
}

pub static MEDIA_FILES: &[MediaFile] = &[
    MediaFile {
        filename: "bg-image.png",
        alt: "Hero background image",
        description: "Main background image for the hero section",
    },
    MediaFile {
        filename: "ceo.png",
        alt: "CEO photo",
        description: "Photo of the CEO for the team section",
    },
    MediaFile {
        filename: "codeious-logo.png",
        alt: "Codeious logo",
        description: "Company logo for branding and footer",
    },
    MediaFile {
        filename: "shopen-section-image.png",
        alt: "Shopen platform interface",
        description: "Interface screenshot for the Shopen section",
    },
    MediaFile {
        filename: "technology-background.png",
        alt: "Technology background",
        description: "Background image for the technology section",
    },
];

const SHOPEN_TITLE: LocalizedText = LocalizedText::both(
    "Meet shopen, our new buddy.",
    "Poznaj shopen, naszego nowego kumpla.",
);

const SHOPEN_ITEMS: &[CatalogItem] = &[
    CatalogItem::slide(
        SHOPEN_TITLE,
        LocalizedText::both(
            "**It is designed to revolutionize online retail with cutting-edge AI, enabling personalized customer experiences and data-driven insights.**",
            "**Został zaprojektowany, aby zrewolucjonizować handel internetowy dzięki najnowocześniejszej sztucznej inteligencji.**",
        ),
        LocalizedText::both(
            "Fully customizable, it empowers businesses to tailor every aspect to their unique brand and operational needs. Built for speed, the platform ensures lightning-fast load times and seamless performance, even under high traffic.",
            "W pełni konfigurowalny, umożliwia firmom dostosowanie każdego aspektu do ich unikalnej marki i potrzeb operacyjnych.",
        ),
    ),
    CatalogItem::slide(
        LocalizedText::both("Shopen transforms ecommerce.", "Shopen przekształca ecommerce."),
        LocalizedText::both(
            "**Our innovative platform leverages machine learning algorithms to predict customer behavior and optimize the shopping experience in real-time.**",
            "**Nasza innowacyjna platforma wykorzystuje algorytmy uczenia maszynowego do przewidywania zachowań klientów i optymalizacji doświadczenia zakupowego w czasie rzeczywistym.**",
        ),
        LocalizedText::both(
            "With advanced analytics and intelligent automation, businesses can make data-driven decisions that drive growth and increase customer satisfaction across all touchpoints.",
            "Dzięki zaawansowanej analityce i inteligentnej automatyzacji, firmy mogą podejmować decyzje oparte na danych, które napędzają wzrost i zwiększają zadowolenie klientów we wszystkich punktach kontaktu.",
        ),
    ),
    CatalogItem::slide(
        LocalizedText::both("Scale with confidence.", "Skaluj z pewnością."),
        LocalizedText::both(
            "**Built on cloud-native architecture, Shopen handles millions of transactions seamlessly while maintaining peak performance and reliability.**",
            "**Zbudowany w oparciu o architekturę natywną dla chmury, Shopen obsługuje miliony transakcji bezproblemowo, zachowując szczytową wydajność i niezawodność.**",
        ),
        LocalizedText::both(
            "From startup to enterprise, our platform grows with your business, offering unlimited scalability and enterprise-grade security that you can trust.",
            "Od startupu do przedsiębiorstwa, nasza platforma rośnie razem z Twoim biznesem, oferując nieograniczoną skalowalność i bezpieczeństwo klasy korporacyjnej, któremu możesz zaufać.",
        ),
    ),
];

const FEATURE_ITEMS: &[CatalogItem] = &[
    CatalogItem::titled(
        LocalizedText::both("10 times faster, 10 times stronger", "10 razy szybszy, 10 razy silniejszy"),
        LocalizedText::both(
            "Our platform delivers transactions and page loads up to 10 times faster than competitors, ensuring seamless performance.",
            "Nasza platforma dostarcza transakcje i ładowanie stron do 10 razy szybciej niż konkurencja, zapewniając płynną wydajność.",
        ),
    ),
    CatalogItem::titled(
        LocalizedText::both("Packed with smart UX and unique UI", "Wyposażony w inteligentny UX i unikalny UI"),
        LocalizedText::both(
            "Intuitive UX solutions optimize navigation and personalization, boosting engagement and conversions.",
            "Intuicyjne rozwiązania UX optymalizują nawigację i personalizację, zwiększając zaangażowanie i konwersje.",
        ),
    ),
    CatalogItem::titled(
        LocalizedText::both("Seamless editing and interaction", "Płynna edycja i interakcja"),
        LocalizedText::both(
            "Drag-and-drop editing and interactive features enable real-time customization and engaging user experiences.",
            "Edycja metodą przeciągnij i upuść oraz funkcje interaktywne umożliwiają dostosowanie w czasie rzeczywistym i angażujące doświadczenia użytkownika.",
        ),
    ),
    CatalogItem::titled(
        LocalizedText::both("Fully on board with new AI trends", "W pełni na pokładzie z nowymi trendami AI"),
        LocalizedText::both(
            "The platform leverages cutting-edge AI trends like predictive analytics for personalized, future-ready ecommerce.",
            "Platforma wykorzystuje najnowocześniejsze trendy AI, takie jak analityka predykcyjna dla spersonalizowanego, przyszłościowego ecommerce.",
        ),
    ),
    CatalogItem::titled(
        LocalizedText::both("Chatbot Integration and customization", "Integracja i dostosowywanie chatbota"),
        LocalizedText::both(
            "AI-powered chatbots provide instant, personalized customer support, enhancing satisfaction and sales.",
            "Chatboty oparte na AI zapewniają natychmiastową, spersonalizowaną obsługę klienta, zwiększając zadowolenie i sprzedaż.",
        ),
    ),
    CatalogItem::titled(
        LocalizedText::both("24/7 Support for all customers", "Wsparcie 24/7 dla wszystkich klientów"),
        LocalizedText::both(
            "Round-the-clock support ensures prompt issue resolution for all businesses and users.",
            "Całodobowe wsparcie zapewnia szybkie rozwiązywanie problemów dla wszystkich firm i użytkowników.",
        ),
    ),
];

const TECHNOLOGY_DESCRIPTION: LocalizedText = LocalizedText::both(
    "Our team operates in full alignment with industry-leading IT standards, ensuring robust, secure, and efficient ecommerce solutions.",
    "Nasz zespół działa w pełnej zgodności z wiodącymi w branży standardami IT, zapewniając solidne, bezpieczne i wydajne rozwiązania ecommerce.",
);

const TECHNOLOGY_ITEMS: &[CatalogItem] = &[
    CatalogItem::slide(
        LocalizedText::both(
            "Technology at the core\nof our operations",
            "Technologia w centrum\nnaszych działań",
        ),
        TECHNOLOGY_DESCRIPTION,
        LocalizedText::both(
            "We proactively seek new opportunities, embracing cutting-edge technologies to enhance platform performance and user experience.",
            "Proaktywnie poszukujemy nowych możliwości, przyjmując najnowocześniejsze technologie w celu poprawy wydajności platformy i doświadczenia użytkownika.",
        ),
    ),
    CatalogItem::slide(
        LocalizedText::both("Innovation drives\nour solutions", "Innowacje napędzają\nnasze rozwiązania"),
        LocalizedText::both(
            "We leverage cutting-edge technologies to build scalable and performant ecommerce platforms that handle millions of transactions daily.",
            "Wykorzystujemy najnowocześniejsze technologie do budowania skalowalnych i wydajnych platform ecommerce, które obsługują miliony transakcji dziennie.",
        ),
        LocalizedText::both(
            "Our innovative approach ensures your business stays ahead of the competition with future-ready technology solutions.",
            "Nasze innowacyjne podejście zapewnia, że Twój biznes wyprzedza konkurencję dzięki gotowym na przyszłość rozwiązaniom technologicznym.",
        ),
    ),
    CatalogItem::slide(
        LocalizedText::both("Excellence in\nevery implementation", "Doskonałość w\nkażdej implementacji"),
        LocalizedText::both(
            "From cloud infrastructure to microservices architecture, we implement best practices that ensure reliability and scalability.",
            "Od infrastruktury chmurowej po architekturę mikrousług, wdrażamy najlepsze praktyki zapewniające niezawodność i skalowalność.",
        ),
        LocalizedText::both(
            "Our commitment to excellence drives us to deliver solutions that exceed expectations and grow with your business.",
            "Nasze zaangażowanie w doskonałość skłania nas do dostarczania rozwiązań, które przekraczają oczekiwania i rosną razem z Twoim biznesem.",
        ),
    ),
];

const TEAM_ITEMS: &[CatalogItem] = &[CatalogItem {
    title: Some(LocalizedText::both("Patryk Wąsik", "Patryk Wąsik")),
    description: Some(LocalizedText::both(
        "Patryk, a seasoned CEO with over 20 years of coding expertise, leads our ecommerce platform company with a hands-on approach to innovation. His extensive experience in software development, from crafting scalable systems to pioneering AI-driven solutions, drives our mission to redefine online retail. Living in Kraków with family, Jan balances family life with a passion for building cutting-edge technology. His deep technical knowledge and strategic vision ensure our platform remains fast, customizable, and aligned with industry trends.",
        "Patryk, doświadczony CEO z ponad 20-letnim doświadczeniem w programowaniu, kieruje naszą firmą platform ecommerce z praktycznym podejściem do innowacji. Jego bogate doświadczenie w rozwoju oprogramowania, od tworzenia skalowalnych systemów po pionierskie rozwiązania oparte na AI, napędza naszą misję przedefiniowania handlu internetowego. Mieszkając w Krakowie z rodziną, Jan równoważy życie rodzinne z pasją do budowania najnowocześniejszych technologii.",
    )),
    additional_text: Some(LocalizedText::both(
        "Living in Kraków with family, Jan balances family life with a passion for building cutting-edge technology. His deep technical knowledge and strategic vision ensure our platform remains fast, customizable, and aligned with industry trends.",
        "Mieszkając w Krakowie z rodziną, Jan równoważy życie rodzinne z pasją do budowania najnowocześniejszych technologii. Jego głęboka wiedza techniczna i strategiczna wizja zapewniają, że nasza platforma pozostaje szybka, konfigurowalna i zgodna z trendami branżowymi.",
    )),
    role: Some(LocalizedText::both("CEO Codeious", "CEO Codeious")),
    image: Some("ceo.png"),
}];

const FAQ_ITEMS: &[CatalogItem] = &[
    CatalogItem::titled(
        LocalizedText::both(
            "How quickly can I start using shopen?",
            "Jak szybko mogę zacząć korzystać z shopen?",
        ),
        LocalizedText::both(
            "Once you purchase our ecommerce platform software, it typically becomes available within 3-5 business days, depending on your specific requirements. Our team conducts thorough testing, sets up your account, processes payment, and configures the servers to ensure optimal performance. The ecommerce platform is then tailored to your needs, enabling a seamless launch. For urgent setups, we offer expedited options - contact our 24/7 support for details.",
            "Po zakupie naszej platformy ecommerce jest ona zazwyczaj dostępna w ciągu 3-5 dni roboczych, w zależności od Twoich wymagań. Nasz zespół przeprowadza dokładne testy, zakłada konto, przetwarza płatność i konfiguruje serwery, aby zapewnić optymalną wydajność. Platforma jest następnie dostosowywana do Twoich potrzeb, co umożliwia płynne uruchomienie. W pilnych przypadkach oferujemy przyspieszone wdrożenie - skontaktuj się z naszym całodobowym wsparciem.",
        ),
    ),
    CatalogItem::titled(
        LocalizedText::both("How much would it cost me?", "Ile by mnie to kosztowało?"),
        LocalizedText::both(
            "Our pricing is customized based on your specific needs and requirements. We offer flexible pricing models including one-time licenses, subscription plans, and enterprise solutions. Contact our sales team for a personalized quote that fits your budget and business goals.",
            "Nasze ceny są ustalane indywidualnie na podstawie Twoich potrzeb i wymagań. Oferujemy elastyczne modele cenowe, w tym licencje jednorazowe, plany subskrypcyjne i rozwiązania dla przedsiębiorstw. Skontaktuj się z naszym działem sprzedaży, aby otrzymać wycenę dopasowaną do Twojego budżetu i celów biznesowych.",
        ),
    ),
    CatalogItem::titled(
        LocalizedText::both(
            "Are you offering any customization?",
            "Czy oferujecie możliwość dostosowania?",
        ),
        LocalizedText::both(
            "Yes, we offer extensive customization options to match your brand and business requirements. Our platform is designed to be highly flexible, allowing custom themes, features, integrations, and workflows. Our development team can work with you to implement specific customizations.",
            "Tak, oferujemy szerokie możliwości dostosowania do Twojej marki i wymagań biznesowych. Nasza platforma jest bardzo elastyczna i pozwala na własne motywy, funkcje, integracje i procesy. Nasz zespół programistów może wspólnie z Tobą wdrożyć konkretne modyfikacje.",
        ),
    ),
    CatalogItem::titled(
        LocalizedText::both("Can I see a demo?", "Czy mogę zobaczyć demo?"),
        LocalizedText::both(
            "Absolutely! We offer live demos and trial access to showcase our platform's capabilities. Schedule a personalized demo with our team to see how Shopen can transform your ecommerce operations. Contact us to book your demo session.",
            "Oczywiście! Oferujemy prezentacje na żywo i dostęp próbny, aby pokazać możliwości naszej platformy. Umów się na spersonalizowane demo z naszym zespołem i zobacz, jak Shopen może odmienić Twój ecommerce. Skontaktuj się z nami, aby zarezerwować termin.",
        ),
    ),
    CatalogItem::titled(
        LocalizedText::both(
            "Is there a way to view your Roadmap?",
            "Czy mogę zobaczyć Waszą mapę rozwoju?",
        ),
        LocalizedText::both(
            "Yes, we maintain a public roadmap that outlines our planned features and improvements. You can access it through our documentation portal or contact our team for detailed information about upcoming releases and feature timelines.",
            "Tak, prowadzimy publiczną mapę rozwoju opisującą planowane funkcje i usprawnienia. Znajdziesz ją w naszym portalu dokumentacji lub możesz skontaktować się z naszym zespołem, aby uzyskać szczegóły dotyczące nadchodzących wydań.",
        ),
    ),
];

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        subtitle: Some(LocalizedText::both(
            "We build next-gen, cloud-based eCommerce for Enterprise",
            "Budujemy eCommerce nowej generacji w chmurze dla przedsiębiorstw",
        )),
        media: CatalogMedia {
            background_image: Some("bg-image.png"),
            section_image: None,
            logo: Some("codeious-logo.png"),
        },
        ..CatalogEntry::new(
            SectionId::Hero,
            LocalizedText::both("Welcome to codeious", "Witamy w codeious"),
            1.0,
        )
    },
    CatalogEntry {
        description: Some(LocalizedText::both(
            "We are a team of passionate developers and designers creating innovative eCommerce solutions.",
            "Jesteśmy zespołem pasjonatów programistów i projektantów tworzących innowacyjne rozwiązania eCommerce.",
        )),
        ..CatalogEntry::new(SectionId::AboutUs, LocalizedText::both("About Us", "O Nas"), 2.0)
    },
    CatalogEntry {
        description: Some(LocalizedText::both(
            "**It is designed to revolutionize online retail with cutting-edge AI, enabling personalized customer experiences and data-driven insights.**",
            "**Został zaprojektowany, aby zrewolucjonizować handel internetowy dzięki najnowocześniejszej sztucznej inteligencji, umożliwiając spersonalizowane doświadczenia klientów i spostrzeżenia oparte na danych.**",
        )),
        additional_content: Some(LocalizedText::both(
            "Fully customizable, it empowers businesses to tailor every aspect to their unique brand and operational needs. Built for speed, the platform ensures lightning-fast load times and seamless performance, even under high traffic.",
            "W pełni konfigurowalny, umożliwia firmom dostosowanie każdego aspektu do ich unikalnej marki i potrzeb operacyjnych. Zbudowany z myślą o szybkości, zapewnia błyskawiczne czasy ładowania i płynną wydajność, nawet przy dużym ruchu.",
        )),
        media: CatalogMedia {
            background_image: None,
            section_image: Some("shopen-section-image.png"),
            logo: None,
        },
        carousel_items: SHOPEN_ITEMS,
        ..CatalogEntry::new(SectionId::Shopen, SHOPEN_TITLE, 3.0)
    },
    CatalogEntry {
        carousel_items: FEATURE_ITEMS,
        ..CatalogEntry::new(
            SectionId::ShopenFeatures,
            LocalizedText::both("Shopen in a nutshell", "Shopen w pigułce"),
            3.5,
        )
    },
    CatalogEntry {
        description: Some(TECHNOLOGY_DESCRIPTION),
        additional_content: Some(LocalizedText::both(
            "We proactively seek new opportunities, embracing cutting-edge technologies to enhance platform performance and user experience.\n\nGo, with its lightweight concurrency model and fast compilation, powers modern **ecommerce platforms** by enabling scalable, high-performance backend systems. Its efficient handling of microservices allows seamless processing of millions of daily transactions, crucial for high-volume online stores.\n\nGo's robust standard library and memory safety features streamline development, ensuring **secure and reliable platform operations**. Leading ecommerce companies leverage Go to build responsive APIs and real-time inventory systems, enhancing user experience and operational agility.",
            "Proaktywnie poszukujemy nowych możliwości, przyjmując najnowocześniejsze technologie w celu poprawy wydajności platformy i doświadczenia użytkownika.\n\nGo, dzięki swojemu lekkiemu modelowi współbieżności i szybkiej kompilacji, napędza nowoczesne **platformy ecommerce**, umożliwiając skalowalne, wydajne systemy backendowe. Jego efektywna obsługa mikrousług pozwala na bezproblemowe przetwarzanie milionów dziennych transakcji, co jest kluczowe dla sklepów internetowych o dużym natężeniu ruchu.\n\nSolidna biblioteka standardowa Go i funkcje bezpieczeństwa pamięci usprawniają rozwój, zapewniając **bezpieczne i niezawodne operacje platformy**. Wiodące firmy ecommerce wykorzystują Go do budowania responsywnych API i systemów inwentaryzacji w czasie rzeczywistym, poprawiając doświadczenie użytkownika i zwinność operacyjną.",
        )),
        cta_text: Some(LocalizedText::both("Let's GO!", "Idźmy z GO!")),
        media: CatalogMedia {
            background_image: Some("technology-background.png"),
            section_image: None,
            logo: None,
        },
        carousel_items: TECHNOLOGY_ITEMS,
        ..CatalogEntry::new(
            SectionId::Technology,
            LocalizedText::both(
                "Technology at the core of our operations",
                "Technologia w centrum naszych działań",
            ),
            4.0,
        )
    },
    CatalogEntry {
        carousel_items: TEAM_ITEMS,
        ..CatalogEntry::new(SectionId::Team, LocalizedText::both("Meet the team", "Poznaj zespół"), 5.0)
    },
    CatalogEntry {
        carousel_items: FAQ_ITEMS,
        ..CatalogEntry::new(
            SectionId::Faq,
            LocalizedText::both(
                "FAQ - Find answers to your questions",
                "FAQ - Znajdź odpowiedzi na swoje pytania",
            ),
            5.5,
        )
    },
    CatalogEntry {
        subtitle: Some(LocalizedText::both("Connect with us", "Połącz się z nami")),
        cta_text: Some(LocalizedText::both("Send", "Wyślij")),
        ..CatalogEntry::new(
            SectionId::Contact,
            LocalizedText::both("Get in touch", "Skontaktuj się z nami"),
            6.0,
        )
    },
    CatalogEntry {
        media: CatalogMedia {
            background_image: None,
            section_image: None,
            logo: Some("codeious-logo.png"),
        },
        ..CatalogEntry::new(SectionId::Footer, LocalizedText::en("Copyright @ Codeious 2025"), 7.0)
    },
];
