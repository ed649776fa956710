//! Phrase tables for poetic descriptions
//!
//! Each category maps short keys to phrase groups. Tags select groups by
//! substring containment; a category with no matching group contributes every
//! phrase it has.

use crate::models::ContextTag;

/// A keyed group of interchangeable phrases
#[derive(Debug, Clone, Copy)]
pub struct PhraseGroup {
    pub key: &'static str,
    pub phrases: &'static [&'static str],
}

/// A semantic category of phrases
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub groups: &'static [PhraseGroup],
}

impl Category {
    /// Phrases from groups whose key matches any tag, or the whole category
    /// when nothing matches.
    pub fn select<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&'static str> {
        let matched: Vec<&'static str> = self
            .groups
            .iter()
            .filter(|group| tags.iter().any(|tag| key_matches(group.key, tag.as_ref())))
            .flat_map(|group| group.phrases.iter().copied())
            .collect();

        if matched.is_empty() {
            self.all()
        } else {
            matched
        }
    }

    /// Every phrase in the category
    pub fn all(&self) -> Vec<&'static str> {
        self.groups
            .iter()
            .flat_map(|group| group.phrases.iter().copied())
            .collect()
    }
}

fn key_matches(key: &str, tag: &str) -> bool {
    !tag.is_empty() && (tag.contains(key) || key.contains(tag))
}

/// Trim tags, strip a leading `#` and drop blanks
pub fn normalize_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    tags.iter()
        .map(|tag| tag.as_ref().trim().trim_start_matches('#').trim())
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Caption used when the caller supplies none
pub const DEFAULT_CAPTION: &str = "這段時光";

pub static SCENES: Category = Category {
    name: "scene",
    groups: &[
        PhraseGroup {
            key: "校園",
            phrases: &["紅磚長廊", "鐘樓之下", "椰林大道", "圖書館前的台階"],
        },
        PhraseGroup {
            key: "畢業",
            phrases: &["學士帽飛揚的草坪", "典禮會場", "驪歌響起的禮堂"],
        },
        PhraseGroup {
            key: "聚會",
            phrases: &["燈火通明的宴席", "熱鬧的餐桌旁", "久別重逢的包廂"],
        },
        PhraseGroup {
            key: "運動",
            phrases: &["綠茵球場", "奔騰的跑道", "汗水揮灑的體育館"],
        },
        PhraseGroup {
            key: "學術",
            phrases: &["講堂之上", "研討會場", "書香滿溢的會議廳"],
        },
        PhraseGroup {
            key: "旅行",
            phrases: &["遠方的山徑", "海風吹拂的港口", "異鄉的街角"],
        },
        PhraseGroup {
            key: "自然",
            phrases: &["湖光山色之間", "青山綠水旁", "落英繽紛的小徑"],
        },
        PhraseGroup {
            key: "節慶",
            phrases: &["張燈結綵的廣場", "煙火綻放的夜空", "團圓的廳堂"],
        },
    ],
};

pub static EMOTIONS: Category = Category {
    name: "emotion",
    groups: &[
        PhraseGroup {
            key: "溫馨",
            phrases: &["暖意盈懷", "笑語溫柔", "情深意濃"],
        },
        PhraseGroup {
            key: "懷念",
            phrases: &["往事如昨", "思緒悠長", "舊夢依稀"],
        },
        PhraseGroup {
            key: "喜悅",
            phrases: &["歡聲笑語", "喜上眉梢", "滿心歡喜"],
        },
        PhraseGroup {
            key: "感動",
            phrases: &["熱淚盈眶", "心潮澎湃", "感念於心"],
        },
        PhraseGroup {
            key: "激昂",
            phrases: &["意氣風發", "豪情萬丈", "鬥志昂揚"],
        },
        PhraseGroup {
            key: "寧靜",
            phrases: &["心如止水", "歲月靜好", "恬淡安然"],
        },
    ],
};

pub static ACTIONS: Category = Category {
    name: "action",
    groups: &[
        PhraseGroup {
            key: "合影",
            phrases: &["並肩留影", "定格笑顏", "相機前擠作一團"],
        },
        PhraseGroup {
            key: "歡聚",
            phrases: &["舉杯共飲", "圍坐談笑", "把酒話當年"],
        },
        PhraseGroup {
            key: "比賽",
            phrases: &["奮力拚搏", "全力衝刺", "並肩作戰"],
        },
        PhraseGroup {
            key: "演講",
            phrases: &["侃侃而談", "娓娓道來", "傾聽真知灼見"],
        },
        PhraseGroup {
            key: "漫步",
            phrases: &["緩步徐行", "信步閒遊", "踏著落葉前行"],
        },
        PhraseGroup {
            key: "慶祝",
            phrases: &["歡呼雀躍", "擊掌相慶", "共享榮光"],
        },
    ],
};

pub static ALLUSIONS: Category = Category {
    name: "allusion",
    groups: &[
        PhraseGroup {
            key: "友情",
            phrases: &["海內存知己，天涯若比鄰", "桃花潭水深千尺，不及汪倫送我情"],
        },
        PhraseGroup {
            key: "師恩",
            phrases: &["春蠶到死絲方盡，蠟炬成灰淚始乾", "落紅不是無情物，化作春泥更護花"],
        },
        PhraseGroup {
            key: "離別",
            phrases: &["勸君更盡一杯酒，西出陽關無故人", "莫愁前路無知己，天下誰人不識君"],
        },
        PhraseGroup {
            key: "壯志",
            phrases: &["長風破浪會有時，直掛雲帆濟滄海", "會當凌絕頂，一覽眾山小"],
        },
        PhraseGroup {
            key: "時光",
            phrases: &["人生若只如初見", "此情可待成追憶，只是當時已惘然"],
        },
    ],
};

pub static SEASONS: Category = Category {
    name: "season",
    groups: &[
        PhraseGroup {
            key: "春",
            phrases: &["春風拂面", "桃李芬芳", "百花初綻"],
        },
        PhraseGroup {
            key: "夏",
            phrases: &["蟬鳴盛夏", "驕陽似火", "荷風送香"],
        },
        PhraseGroup {
            key: "秋",
            phrases: &["金風送爽", "楓紅似火", "秋月皎潔"],
        },
        PhraseGroup {
            key: "冬",
            phrases: &["寒梅傲雪", "暖陽融冬", "瑞雪紛飛"],
        },
    ],
};

/// Every category used by the sentence templates
pub static CATEGORIES: [&Category; 5] = [&SCENES, &EMOTIONS, &ACTIONS, &ALLUSIONS, &SEASONS];

/// Fixed sentences for a photo context
pub fn context_sentences(context: ContextTag) -> &'static [&'static str] {
    match context {
        ContextTag::Event => &[
            "冠蓋雲集，盛況空前，校友們齊聚一堂，共同見證這難忘的時刻。",
            "燈光璀璨，掌聲雷動，一場精彩的盛會，凝聚了跨越世代的情誼。",
            "活動圓滿落幕，歡聲笑語猶在耳畔，相聚的美好將長存心間。",
        ],
        ContextTag::Academic => &[
            "學者雲集，智慧碰撞，學術殿堂書聲朗朗，知識的光芒照亮前行的道路。",
            "論壇精彩，思辨激烈，在知識的海洋中遨遊，每一次交流都是智慧的升華。",
            "講座深入淺出，聽眾專注聆聽，學術氛圍濃厚，求知的熱情如火如荼。",
        ],
        ContextTag::Sports => &[
            "揮灑汗水，奮勇爭先，賽場上的每一次拚搏都寫下青春的注腳。",
            "團隊默契無間，攻守之間盡顯風采，勝負之外更見同窗情誼。",
            "健兒英姿颯爽，加油聲此起彼伏，運動精神在這裡熠熠生輝。",
        ],
        ContextTag::Class => &[
            "同窗數載，情誼深厚，教室裡的點點滴滴，都是最珍貴的回憶。",
            "昔日青澀少年，今朝各展風華，班級的羈絆從未因時光而褪色。",
            "黑板前的笑語，課桌間的紙條，那些年我們一起走過的歲月依然鮮明。",
        ],
        ContextTag::Casual => &[
            "輕鬆自在，笑容滿面，平凡的日子裡也藏著不平凡的美好。",
            "三五好友，閒話家常，簡單的相聚便是生活最溫暖的底色。",
            "隨手一拍，定格當下，每一個尋常瞬間都值得細細珍藏。",
        ],
    }
}
