//! Rule tables, seed greetings and static strings for the three portal
//! assistants.

use crate::chat_message::ResponseCard;
use crate::constants::{DEFAULT_REPLY_DELAY_MS, SIDEBAR_REPLY_DELAY_MS};
use crate::locale::{Language, Localized};
use crate::simulator::{Reply, ReplyBuilder, Rule, RuleTable};
use crate::widget::WidgetKind;

#[derive(Debug, Clone, Copy)]
pub struct QuickTopic {
    pub key: &'static str,
    pub icon: &'static str,
    pub label: Localized,
    pub description: Option<Localized>,
    /// Text submitted when the topic is picked.
    pub query: Localized,
}

#[derive(Debug, Clone, Copy)]
pub struct WidgetText {
    pub title: Localized,
    pub subtitle: Localized,
    pub placeholder: Localized,
    pub send: Localized,
    pub voice_input: Localized,
    pub listening: Localized,
    pub thinking: Localized,
    pub microphone_access: Localized,
    pub quick_topics: Localized,
}

/// Everything that distinguishes one assistant from another.
#[derive(Debug, Clone)]
pub struct WidgetProfile {
    pub kind: WidgetKind,
    pub text: &'static WidgetText,
    pub quick_topics: &'static [QuickTopic],
    pub voice_enabled: bool,
    pub seed: ReplyBuilder,
    pub table: RuleTable,
    pub default_delay_ms: u64,
}

pub fn profile(kind: WidgetKind) -> WidgetProfile {
    match kind {
        WidgetKind::FullPage => WidgetProfile {
            kind,
            text: &FULL_PAGE_TEXT,
            quick_topics: &FULL_PAGE_TOPICS,
            voice_enabled: true,
            seed: full_page_greeting,
            table: RuleTable::new(full_page_default),
            default_delay_ms: DEFAULT_REPLY_DELAY_MS,
        },
        WidgetKind::Floating => WidgetProfile {
            kind,
            text: &FLOATING_TEXT,
            quick_topics: &[],
            voice_enabled: false,
            seed: floating_greeting,
            table: floating_table(),
            default_delay_ms: DEFAULT_REPLY_DELAY_MS,
        },
        WidgetKind::Sidebar => WidgetProfile {
            kind,
            text: &SIDEBAR_TEXT,
            quick_topics: &SIDEBAR_TOPICS,
            voice_enabled: true,
            seed: sidebar_greeting,
            table: RuleTable::new(sidebar_default),
            default_delay_ms: SIDEBAR_REPLY_DELAY_MS,
        },
    }
}

// Full-page "ISRO Help Assistant"

static FULL_PAGE_TEXT: WidgetText = WidgetText {
    title: Localized::new("ISRO Help Assistant", "ISRO सहायक"),
    subtitle: Localized::new(
        "Satellite Data & Weather Information Helper",
        "उपग्रह डेटा और मौसम जानकारी सहायक",
    ),
    placeholder: Localized::new(
        "Ask about satellite data, weather, ocean forecasts, or cyclone alerts...",
        "उपग्रह डेटा, मौसम, समुद्री पूर्वानुमान, या चक्रवात अलर्ट के बारे में पूछें...",
    ),
    send: Localized::new("Send", "भेजें"),
    voice_input: Localized::new("Voice input", "वॉयस इनपुट"),
    listening: Localized::new("Listening...", "सुन रहा है..."),
    thinking: Localized::new("ISRO Help Assistant is thinking...", "ISRO सहायक सोच रहा है..."),
    microphone_access: Localized::new(
        "Enable microphone access to use voice input",
        "वॉयस इनपुट का उपयोग करने के लिए माइक्रोफ़ोन एक्सेस सक्षम करें",
    ),
    quick_topics: Localized::new("Quick Topics", "त्वरित विषय"),
};

static FULL_PAGE_TOPICS: [QuickTopic; 5] = [
    QuickTopic {
        key: "insat",
        icon: "🛰️",
        label: Localized::new("INSAT Satellite Data", "INSAT उपग्रह डेटा"),
        description: None,
        query: Localized::new(
            "Tell me about INSAT satellite data",
            "INSAT उपग्रह डेटा के बारे में बताएं",
        ),
    },
    QuickTopic {
        key: "ocean",
        icon: "🌊",
        label: Localized::new("Ocean Forecasts", "समुद्री पूर्वानुमान"),
        description: None,
        query: Localized::new("Show me ocean forecasts", "समुद्री पूर्वानुमान दिखाएं"),
    },
    QuickTopic {
        key: "weather",
        icon: "☁️",
        label: Localized::new("City Weather", "शहर का मौसम"),
        description: None,
        query: Localized::new(
            "I need city weather information",
            "मुझे शहर की मौसम जानकारी चाहिए",
        ),
    },
    QuickTopic {
        key: "cyclone",
        icon: "🌀",
        label: Localized::new("Cyclone Alerts", "चक्रवात अलर्ट"),
        description: None,
        query: Localized::new("Show cyclone alerts", "चक्रवात अलर्ट दिखाएं"),
    },
    QuickTopic {
        key: "download",
        icon: "📥",
        label: Localized::new("Download Datasets", "डेटासेट डाउनलोड"),
        description: None,
        query: Localized::new("How to download datasets?", "डेटासेट कैसे डाउनलोड करें?"),
    },
];

fn full_page_greeting(language: Language) -> Reply {
    let text = Localized::new(
        "Hi! I'm your ISRO Help Assistant. Ask me anything about weather, satellites, ocean data, or downloads.",
        "नमस्ते! मैं आपका ISRO सहायक हूं। मुझसे मौसम, उपग्रह, समुद्री डेटा, या डाउनलोड के बारे में कुछ भी पूछें।",
    );
    Reply::new(text.get(language), Vec::new())
}

fn full_page_default(language: Language) -> Reply {
    let l = |en, hi| Localized::new(en, hi).get(language);
    Reply::new(
        l("Here's what I found for your query:", "आपके प्रश्न के लिए यहां जानकारी है:"),
        vec![ResponseCard::generic(l("Related Information", "संबंधित जानकारी"))
            .description(l(
                "Access detailed satellite data and weather information through our portal",
                "हमारे पोर्टल के माध्यम से विस्तृत उपग्रह डेटा और मौसम जानकारी प्राप्त करें",
            ))
            .link(l("Full details on MOSDAC", "MOSDAC पर पूर्ण विवरण"), "#")
            .link(l("Download Data", "डेटा डाउनलोड करें"), "#")],
    )
}

// Floating "MEERA" widget. English only.

static FLOATING_TEXT: WidgetText = WidgetText {
    title: Localized::same("MEERA"),
    subtitle: Localized::same("Mission & Data Assistant"),
    placeholder: Localized::same("Ask about missions, data, or documents..."),
    send: Localized::same("Send"),
    voice_input: Localized::same("Voice input"),
    listening: Localized::same("Listening..."),
    thinking: Localized::same("MEERA is typing..."),
    microphone_access: Localized::same("Enable microphone access to use voice input"),
    quick_topics: Localized::same("Quick Topics"),
};

fn floating_table() -> RuleTable {
    RuleTable::new(popular_missions)
        .with_rule(Rule::new(
            "megha-tropiques",
            &["megha-tropiques", "megha tropiques"],
            megha_tropiques,
        ))
        .with_rule(Rule::new("insat-3d", &["insat-3d", "insat 3d"], insat_3d))
        .with_rule(Rule::new("ocean", &["ocean", "oceansat"], ocean))
        .with_rule(Rule::new("download", &["download", "data access"], data_portals))
}

fn floating_greeting(_: Language) -> Reply {
    Reply::new(
        "Hi! I'm MEERA. Ask me anything about satellite missions, data access, or documents.",
        Vec::new(),
    )
}

pub(crate) fn megha_tropiques_card() -> ResponseCard {
    ResponseCard::mission("Megha-Tropiques Mission")
        .mission_name("Indo-French Joint Mission")
        .launch_date("October 12, 2011")
        .products(["MADRAS", "SCARAB", "SAPHIR"])
        .download_link("#megha-data")
        .description("Tropical weather and climate monitoring satellite")
}

pub(crate) fn insat_3d_card() -> ResponseCard {
    ResponseCard::mission("INSAT-3D Mission")
        .mission_name("Meteorological Satellite")
        .launch_date("July 26, 2013")
        .products(["Imager", "Sounder", "DRT", "SaR"])
        .download_link("#insat3d-data")
        .description("Advanced meteorological observations and disaster warning")
}

pub(crate) fn oceansat_2_card() -> ResponseCard {
    ResponseCard::mission("OceanSat-2 Data")
        .mission_name("Ocean Color Monitor")
        .launch_date("September 23, 2009")
        .products(["OCM", "ROSA", "Ku-band Scatterometer"])
        .download_link("#oceansat-data")
        .description("Ocean color and wind vector measurements")
}

fn megha_tropiques(_: Language) -> Reply {
    Reply::new(
        "Here's information about Megha-Tropiques data access:",
        vec![megha_tropiques_card()],
    )
}

fn insat_3d(_: Language) -> Reply {
    Reply::new(
        "Here's detailed information about INSAT-3D:",
        vec![insat_3d_card()],
    )
}

fn ocean(_: Language) -> Reply {
    Reply::new(
        "Ocean data is available from multiple missions:",
        vec![
            oceansat_2_card(),
            ResponseCard::document("Ocean Products Portal")
                .description("Access all ocean-related datasets and products")
                .file_type("Portal Access")
                .download_link("#ocean-portal"),
        ],
    )
}

fn data_portals(_: Language) -> Reply {
    Reply::new(
        "Here are the main data access portals:",
        vec![
            ResponseCard::document("MOSDAC Data Portal")
                .description("Primary portal for meteorological and oceanographic data")
                .file_type("Web Portal")
                .download_link("#mosdac-portal"),
            ResponseCard::document("Bhuvan Geo-Platform")
                .description("Geospatial data and web services")
                .file_type("Web Services")
                .download_link("#bhuvan-portal"),
        ],
    )
}

fn popular_missions(_: Language) -> Reply {
    Reply::new(
        "I can help you with satellite missions, data access, and documents. Try asking about specific missions like INSAT-3D, Megha-Tropiques, or OceanSat-2!",
        vec![ResponseCard::document("Popular Missions")
            .description("Browse our catalog of satellite missions and their data products")
            .file_type("Mission Catalog")
            .download_link("#missions-catalog")],
    )
}

// Sidebar "MOSDAC Assistant"

static SIDEBAR_TEXT: WidgetText = WidgetText {
    title: Localized::new("MOSDAC Assistant", "MOSDAC सहायक"),
    subtitle: Localized::new(
        "Satellite Data & Weather Information Helper",
        "उपग्रह डेटा और मौसम जानकारी सहायक",
    ),
    placeholder: Localized::new(
        "Ask about satellite data, weather information, or download help...",
        "उपग्रह डेटा, मौसम की जानकारी, या डाउनलोड सहायता के बारे में पूछें...",
    ),
    send: Localized::new("Send", "भेजें"),
    voice_input: Localized::new("Voice input", "वॉयस इनपुट"),
    listening: Localized::new("Listening...", "सुन रहा है..."),
    thinking: Localized::new("MOSDAC Assistant is thinking...", "MOSDAC सहायक सोच रहा है..."),
    microphone_access: Localized::new(
        "Enable microphone access to use voice input",
        "वॉयस इनपुट का उपयोग करने के लिए माइक्रोफ़ोन एक्सेस सक्षम करें",
    ),
    quick_topics: Localized::new("Quick Topics", "त्वरित विषय"),
};

static SIDEBAR_TOPICS: [QuickTopic; 5] = [
    QuickTopic {
        key: "insat-series",
        icon: "🛰️",
        label: Localized::new("INSAT Series", "INSAT श्रृंखला"),
        description: Some(Localized::new(
            "Indian National Satellite System data and products",
            "भारतीय राष्ट्रीय उपग्रह प्रणाली डेटा और उत्पाद",
        )),
        query: Localized::new("INSAT Series", "INSAT श्रृंखला"),
    },
    QuickTopic {
        key: "oceansat",
        icon: "🌊",
        label: Localized::new("OceanSat", "ओशनसैट"),
        description: Some(Localized::new(
            "Ocean observation and monitoring data",
            "समुद्री अवलोकन और निगरानी डेटा",
        )),
        query: Localized::new("OceanSat", "ओशनसैट"),
    },
    QuickTopic {
        key: "rainfall",
        icon: "🌧️",
        label: Localized::new("Rainfall Data", "वर्षा डेटा"),
        description: Some(Localized::new(
            "Precipitation measurements and forecasts",
            "वर्षा माप और पूर्वानुमान",
        )),
        query: Localized::new("Rainfall Data", "वर्षा डेटा"),
    },
    QuickTopic {
        key: "cyclone",
        icon: "🌀",
        label: Localized::new("Cyclone Tracking", "चक्रवात ट्रैकिंग"),
        description: Some(Localized::new(
            "Tropical cyclone monitoring and analysis",
            "उष्णकटिबंधीय चक्रवात निगरानी और विश्लेषण",
        )),
        query: Localized::new("Cyclone Tracking", "चक्रवात ट्रैकिंग"),
    },
    QuickTopic {
        key: "download-faqs",
        icon: "❓",
        label: Localized::new("Download FAQs", "डाउनलोड FAQ"),
        description: Some(Localized::new(
            "Common questions about data access and downloads",
            "डेटा पहुंच और डाउनलोड के बारे में सामान्य प्रश्न",
        )),
        query: Localized::new("Download FAQs", "डाउनलोड FAQ"),
    },
];

fn sidebar_greeting(language: Language) -> Reply {
    let l = |en, hi| Localized::new(en, hi).get(language);
    Reply::new(
        l(
            "Hello! I'm MOSDAC Assistant. How can I help you explore satellite data and Earth observation products today?",
            "नमस्ते! मैं MOSDAC सहायक हूं। आज मैं उपग्रह डेटा और पृथ्वी अवलोकन उत्पादों का पता लगाने में आपकी कैसे सहायता कर सकता हूं?",
        ),
        vec![
            ResponseCard::generic(l("Popular Datasets", "लोकप्रिय डेटासेट"))
                .description(l(
                    "Explore our most accessed satellite data collections",
                    "हमारे सबसे अधिक एक्सेस किए गए उपग्रह डेटा संग्रह का अन्वेषण करें",
                ))
                .link("INSAT-3D Data", "#")
                .link("OceanSat-2 Products", "#")
                .link("Rainfall Data", "#"),
            ResponseCard::generic(l("Quick Access", "त्वरित पहुंच"))
                .description(l(
                    "Fast access to common queries and downloads",
                    "सामान्य प्रश्नों और डाउनलोड तक तेज़ पहुंच",
                ))
                .link("Download FAQ", "#")
                .link("Data Formats", "#")
                .link("User Guide", "#"),
        ],
    )
}

fn sidebar_default(language: Language) -> Reply {
    let l = |en, hi| Localized::new(en, hi).get(language);
    Reply::new(
        l(
            "I understand you're looking for information about satellite data. Here are some relevant resources:",
            "मैं समझता हूं कि आप उपग्रह डेटा के बारे में जानकारी खोज रहे हैं। यहां कुछ प्रासंगिक संसाधन हैं:",
        ),
        vec![ResponseCard::generic(l("Related Documentation", "संबंधित दस्तावेज़ीकरण"))
            .description(l(
                "Technical guides and user manuals for satellite data access",
                "उपग्रह डेटा पहुंच के लिए तकनीकी गाइड और उपयोगकर्ता मैनुअल",
            ))
            .link("Data Access Guide", "#")
            .link("API Documentation", "#")],
    )
}
