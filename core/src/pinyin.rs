//! Bopomofo ⇄ Hanyu-Pinyin transcoding.
//!
//! Transcoding is ordered substring replacement. The Bopomofo→Pinyin table
//! is stored pre-ordered (tone marks first, then multi-symbol clusters,
//! then single symbols) and swept once left to right; the reverse direction
//! sorts the syllable-map keys by descending length before the sweep. Keys
//! must stay non-overlapping once the longer-prefix rule has been applied.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::tables::TONE_KEYS;

pub static PHONA_TO_HANYU_PINYIN: &[(&str, &str)] = &[
    (" ", "1"),           ("ˊ", "2"),           ("ˇ", "3"),
    ("ˋ", "4"),           ("˙", "5"),
    ("ㄅㄧㄝ", "bie"),    ("ㄅㄧㄠ", "biao"),   ("ㄅㄧㄢ", "bian"),
    ("ㄅㄧㄣ", "bin"),    ("ㄅㄧㄥ", "bing"),   ("ㄆㄧㄚ", "pia"),
    ("ㄆㄧㄝ", "pie"),    ("ㄆㄧㄠ", "piao"),   ("ㄆㄧㄢ", "pian"),
    ("ㄆㄧㄣ", "pin"),    ("ㄆㄧㄥ", "ping"),   ("ㄇㄧㄝ", "mie"),
    ("ㄇㄧㄠ", "miao"),   ("ㄇㄧㄡ", "miu"),    ("ㄇㄧㄢ", "mian"),
    ("ㄇㄧㄣ", "min"),    ("ㄇㄧㄥ", "ming"),   ("ㄈㄧㄠ", "fiao"),
    ("ㄈㄨㄥ", "fong"),   ("ㄉㄧㄚ", "dia"),    ("ㄉㄧㄝ", "die"),
    ("ㄉㄧㄠ", "diao"),   ("ㄉㄧㄡ", "diu"),    ("ㄉㄧㄢ", "dian"),
    ("ㄉㄧㄥ", "ding"),   ("ㄉㄨㄛ", "duo"),    ("ㄉㄨㄟ", "dui"),
    ("ㄉㄨㄢ", "duan"),   ("ㄉㄨㄣ", "dun"),    ("ㄉㄨㄥ", "dong"),
    ("ㄊㄧㄝ", "tie"),    ("ㄊㄧㄠ", "tiao"),   ("ㄊㄧㄢ", "tian"),
    ("ㄊㄧㄥ", "ting"),   ("ㄊㄨㄛ", "tuo"),    ("ㄊㄨㄟ", "tui"),
    ("ㄊㄨㄢ", "tuan"),   ("ㄊㄨㄣ", "tun"),    ("ㄊㄨㄥ", "tong"),
    ("ㄋㄧㄝ", "nie"),    ("ㄋㄧㄠ", "niao"),   ("ㄋㄧㄡ", "niu"),
    ("ㄋㄧㄢ", "nian"),   ("ㄋㄧㄣ", "nin"),    ("ㄋㄧㄤ", "niang"),
    ("ㄋㄧㄥ", "ning"),   ("ㄋㄨㄛ", "nuo"),    ("ㄋㄨㄟ", "nui"),
    ("ㄋㄨㄢ", "nuan"),   ("ㄋㄨㄣ", "nun"),    ("ㄋㄨㄥ", "nong"),
    ("ㄋㄩㄝ", "nve"),    ("ㄌㄧㄚ", "lia"),    ("ㄌㄧㄝ", "lie"),
    ("ㄌㄧㄠ", "liao"),   ("ㄌㄧㄡ", "liu"),    ("ㄌㄧㄢ", "lian"),
    ("ㄌㄧㄣ", "lin"),    ("ㄌㄧㄤ", "liang"),  ("ㄌㄧㄥ", "ling"),
    ("ㄌㄨㄛ", "luo"),    ("ㄌㄨㄢ", "luan"),   ("ㄌㄨㄣ", "lun"),
    ("ㄌㄨㄥ", "long"),   ("ㄌㄩㄝ", "lve"),    ("ㄌㄩㄢ", "lvan"),
    ("ㄍㄧㄠ", "giao"),   ("ㄍㄧㄣ", "gin"),    ("ㄍㄨㄚ", "gua"),
    ("ㄍㄨㄛ", "guo"),    ("ㄍㄨㄜ", "gue"),    ("ㄍㄨㄞ", "guai"),
    ("ㄍㄨㄟ", "gui"),    ("ㄍㄨㄢ", "guan"),   ("ㄍㄨㄣ", "gun"),
    ("ㄍㄨㄤ", "guang"),  ("ㄍㄨㄥ", "gong"),   ("ㄎㄧㄡ", "kiu"),
    ("ㄎㄧㄤ", "kiang"),  ("ㄎㄨㄚ", "kua"),    ("ㄎㄨㄛ", "kuo"),
    ("ㄎㄨㄞ", "kuai"),   ("ㄎㄨㄟ", "kui"),    ("ㄎㄨㄢ", "kuan"),
    ("ㄎㄨㄣ", "kun"),    ("ㄎㄨㄤ", "kuang"),  ("ㄎㄨㄥ", "kong"),
    ("ㄏㄨㄚ", "hua"),    ("ㄏㄨㄛ", "huo"),    ("ㄏㄨㄞ", "huai"),
    ("ㄏㄨㄟ", "hui"),    ("ㄏㄨㄢ", "huan"),   ("ㄏㄨㄣ", "hun"),
    ("ㄏㄨㄤ", "huang"),  ("ㄏㄨㄥ", "hong"),   ("ㄐㄧㄚ", "jia"),
    ("ㄐㄧㄝ", "jie"),    ("ㄐㄧㄠ", "jiao"),   ("ㄐㄧㄡ", "jiu"),
    ("ㄐㄧㄢ", "jian"),   ("ㄐㄧㄣ", "jin"),    ("ㄐㄧㄤ", "jiang"),
    ("ㄐㄧㄥ", "jing"),   ("ㄐㄩㄝ", "jue"),    ("ㄐㄩㄢ", "juan"),
    ("ㄐㄩㄣ", "jun"),    ("ㄐㄩㄥ", "jiong"),  ("ㄑㄧㄚ", "qia"),
    ("ㄑㄧㄝ", "qie"),    ("ㄑㄧㄠ", "qiao"),   ("ㄑㄧㄡ", "qiu"),
    ("ㄑㄧㄢ", "qian"),   ("ㄑㄧㄣ", "qin"),    ("ㄑㄧㄤ", "qiang"),
    ("ㄑㄧㄥ", "qing"),   ("ㄑㄩㄝ", "que"),    ("ㄑㄩㄢ", "quan"),
    ("ㄑㄩㄣ", "qun"),    ("ㄑㄩㄥ", "qiong"),  ("ㄒㄧㄚ", "xia"),
    ("ㄒㄧㄝ", "xie"),    ("ㄒㄧㄠ", "xiao"),   ("ㄒㄧㄡ", "xiu"),
    ("ㄒㄧㄢ", "xian"),   ("ㄒㄧㄣ", "xin"),    ("ㄒㄧㄤ", "xiang"),
    ("ㄒㄧㄥ", "xing"),   ("ㄒㄩㄝ", "xue"),    ("ㄒㄩㄢ", "xuan"),
    ("ㄒㄩㄣ", "xun"),    ("ㄒㄩㄥ", "xiong"),  ("ㄓㄨㄚ", "zhua"),
    ("ㄓㄨㄛ", "zhuo"),   ("ㄓㄨㄞ", "zhuai"),  ("ㄓㄨㄟ", "zhui"),
    ("ㄓㄨㄢ", "zhuan"),  ("ㄓㄨㄣ", "zhun"),   ("ㄓㄨㄤ", "zhuang"),
    ("ㄓㄨㄥ", "zhong"),  ("ㄔㄨㄚ", "chua"),   ("ㄔㄨㄛ", "chuo"),
    ("ㄔㄨㄞ", "chuai"),  ("ㄔㄨㄟ", "chui"),   ("ㄔㄨㄢ", "chuan"),
    ("ㄔㄨㄣ", "chun"),   ("ㄔㄨㄤ", "chuang"), ("ㄔㄨㄥ", "chong"),
    ("ㄕㄨㄚ", "shua"),   ("ㄕㄨㄛ", "shuo"),   ("ㄕㄨㄞ", "shuai"),
    ("ㄕㄨㄟ", "shui"),   ("ㄕㄨㄢ", "shuan"),  ("ㄕㄨㄣ", "shun"),
    ("ㄕㄨㄤ", "shuang"), ("ㄖㄨㄛ", "ruo"),    ("ㄖㄨㄟ", "rui"),
    ("ㄖㄨㄢ", "ruan"),   ("ㄖㄨㄣ", "run"),    ("ㄖㄨㄥ", "rong"),
    ("ㄗㄨㄛ", "zuo"),    ("ㄗㄨㄟ", "zui"),    ("ㄗㄨㄢ", "zuan"),
    ("ㄗㄨㄣ", "zun"),    ("ㄗㄨㄥ", "zong"),   ("ㄘㄨㄛ", "cuo"),
    ("ㄘㄨㄟ", "cui"),    ("ㄘㄨㄢ", "cuan"),   ("ㄘㄨㄣ", "cun"),
    ("ㄘㄨㄥ", "cong"),   ("ㄙㄨㄛ", "suo"),    ("ㄙㄨㄟ", "sui"),
    ("ㄙㄨㄢ", "suan"),   ("ㄙㄨㄣ", "sun"),    ("ㄙㄨㄥ", "song"),
    ("ㄅㄧㄤ", "biang"),  ("ㄉㄨㄤ", "duang"),
    ("ㄅㄚ", "ba"),       ("ㄅㄛ", "bo"),       ("ㄅㄞ", "bai"),
    ("ㄅㄟ", "bei"),      ("ㄅㄠ", "bao"),      ("ㄅㄢ", "ban"),
    ("ㄅㄣ", "ben"),      ("ㄅㄤ", "bang"),     ("ㄅㄥ", "beng"),
    ("ㄅㄧ", "bi"),       ("ㄅㄨ", "bu"),       ("ㄆㄚ", "pa"),
    ("ㄆㄛ", "po"),       ("ㄆㄞ", "pai"),      ("ㄆㄟ", "pei"),
    ("ㄆㄠ", "pao"),      ("ㄆㄡ", "pou"),      ("ㄆㄢ", "pan"),
    ("ㄆㄣ", "pen"),      ("ㄆㄤ", "pang"),     ("ㄆㄥ", "peng"),
    ("ㄆㄧ", "pi"),       ("ㄆㄨ", "pu"),       ("ㄇㄚ", "ma"),
    ("ㄇㄛ", "mo"),       ("ㄇㄜ", "me"),       ("ㄇㄞ", "mai"),
    ("ㄇㄟ", "mei"),      ("ㄇㄠ", "mao"),      ("ㄇㄡ", "mou"),
    ("ㄇㄢ", "man"),      ("ㄇㄣ", "men"),      ("ㄇㄤ", "mang"),
    ("ㄇㄥ", "meng"),     ("ㄇㄧ", "mi"),       ("ㄇㄨ", "mu"),
    ("ㄈㄚ", "fa"),       ("ㄈㄛ", "fo"),       ("ㄈㄟ", "fei"),
    ("ㄈㄡ", "fou"),      ("ㄈㄢ", "fan"),      ("ㄈㄣ", "fen"),
    ("ㄈㄤ", "fang"),     ("ㄈㄥ", "feng"),     ("ㄈㄨ", "fu"),
    ("ㄉㄚ", "da"),       ("ㄉㄜ", "de"),       ("ㄉㄞ", "dai"),
    ("ㄉㄟ", "dei"),      ("ㄉㄠ", "dao"),      ("ㄉㄡ", "dou"),
    ("ㄉㄢ", "dan"),      ("ㄉㄣ", "den"),      ("ㄉㄤ", "dang"),
    ("ㄉㄥ", "deng"),     ("ㄉㄧ", "di"),       ("ㄉㄨ", "du"),
    ("ㄊㄚ", "ta"),       ("ㄊㄜ", "te"),       ("ㄊㄞ", "tai"),
    ("ㄊㄠ", "tao"),      ("ㄊㄡ", "tou"),      ("ㄊㄢ", "tan"),
    ("ㄊㄤ", "tang"),     ("ㄊㄥ", "teng"),     ("ㄊㄧ", "ti"),
    ("ㄊㄨ", "tu"),       ("ㄋㄚ", "na"),       ("ㄋㄜ", "ne"),
    ("ㄋㄞ", "nai"),      ("ㄋㄟ", "nei"),      ("ㄋㄠ", "nao"),
    ("ㄋㄡ", "nou"),      ("ㄋㄢ", "nan"),      ("ㄋㄣ", "nen"),
    ("ㄋㄤ", "nang"),     ("ㄋㄥ", "neng"),     ("ㄋㄧ", "ni"),
    ("ㄋㄨ", "nu"),       ("ㄋㄩ", "nv"),       ("ㄌㄚ", "la"),
    ("ㄌㄛ", "lo"),       ("ㄌㄜ", "le"),       ("ㄌㄞ", "lai"),
    ("ㄌㄟ", "lei"),      ("ㄌㄠ", "lao"),      ("ㄌㄡ", "lou"),
    ("ㄌㄢ", "lan"),      ("ㄌㄤ", "lang"),     ("ㄌㄥ", "leng"),
    ("ㄌㄧ", "li"),       ("ㄌㄨ", "lu"),       ("ㄌㄩ", "lv"),
    ("ㄍㄚ", "ga"),       ("ㄍㄜ", "ge"),       ("ㄍㄞ", "gai"),
    ("ㄍㄟ", "gei"),      ("ㄍㄠ", "gao"),      ("ㄍㄡ", "gou"),
    ("ㄍㄢ", "gan"),      ("ㄍㄣ", "gen"),      ("ㄍㄤ", "gang"),
    ("ㄍㄥ", "geng"),     ("ㄍㄧ", "gi"),       ("ㄍㄨ", "gu"),
    ("ㄎㄚ", "ka"),       ("ㄎㄜ", "ke"),       ("ㄎㄞ", "kai"),
    ("ㄎㄠ", "kao"),      ("ㄎㄡ", "kou"),      ("ㄎㄢ", "kan"),
    ("ㄎㄣ", "ken"),      ("ㄎㄤ", "kang"),     ("ㄎㄥ", "keng"),
    ("ㄎㄨ", "ku"),       ("ㄏㄚ", "ha"),       ("ㄏㄜ", "he"),
    ("ㄏㄞ", "hai"),      ("ㄏㄟ", "hei"),      ("ㄏㄠ", "hao"),
    ("ㄏㄡ", "hou"),      ("ㄏㄢ", "han"),      ("ㄏㄣ", "hen"),
    ("ㄏㄤ", "hang"),     ("ㄏㄥ", "heng"),     ("ㄏㄨ", "hu"),
    ("ㄐㄧ", "ji"),       ("ㄐㄩ", "ju"),       ("ㄑㄧ", "qi"),
    ("ㄑㄩ", "qu"),       ("ㄒㄧ", "xi"),       ("ㄒㄩ", "xu"),
    ("ㄓㄚ", "zha"),      ("ㄓㄜ", "zhe"),      ("ㄓㄞ", "zhai"),
    ("ㄓㄟ", "zhei"),     ("ㄓㄠ", "zhao"),     ("ㄓㄡ", "zhou"),
    ("ㄓㄢ", "zhan"),     ("ㄓㄣ", "zhen"),     ("ㄓㄤ", "zhang"),
    ("ㄓㄥ", "zheng"),    ("ㄓㄨ", "zhu"),      ("ㄔㄚ", "cha"),
    ("ㄔㄜ", "che"),      ("ㄔㄞ", "chai"),     ("ㄔㄠ", "chao"),
    ("ㄔㄡ", "chou"),     ("ㄔㄢ", "chan"),     ("ㄔㄣ", "chen"),
    ("ㄔㄤ", "chang"),    ("ㄔㄥ", "cheng"),    ("ㄔㄨ", "chu"),
    ("ㄕㄚ", "sha"),      ("ㄕㄜ", "she"),      ("ㄕㄞ", "shai"),
    ("ㄕㄟ", "shei"),     ("ㄕㄠ", "shao"),     ("ㄕㄡ", "shou"),
    ("ㄕㄢ", "shan"),     ("ㄕㄣ", "shen"),     ("ㄕㄤ", "shang"),
    ("ㄕㄥ", "sheng"),    ("ㄕㄨ", "shu"),      ("ㄖㄜ", "re"),
    ("ㄖㄠ", "rao"),      ("ㄖㄡ", "rou"),      ("ㄖㄢ", "ran"),
    ("ㄖㄣ", "ren"),      ("ㄖㄤ", "rang"),     ("ㄖㄥ", "reng"),
    ("ㄖㄨ", "ru"),       ("ㄗㄚ", "za"),       ("ㄗㄜ", "ze"),
    ("ㄗㄞ", "zai"),      ("ㄗㄟ", "zei"),      ("ㄗㄠ", "zao"),
    ("ㄗㄡ", "zou"),      ("ㄗㄢ", "zan"),      ("ㄗㄣ", "zen"),
    ("ㄗㄤ", "zang"),     ("ㄗㄥ", "zeng"),     ("ㄗㄨ", "zu"),
    ("ㄘㄚ", "ca"),       ("ㄘㄜ", "ce"),       ("ㄘㄞ", "cai"),
    ("ㄘㄟ", "cei"),      ("ㄘㄠ", "cao"),      ("ㄘㄡ", "cou"),
    ("ㄘㄢ", "can"),      ("ㄘㄣ", "cen"),      ("ㄘㄤ", "cang"),
    ("ㄘㄥ", "ceng"),     ("ㄘㄨ", "cu"),       ("ㄙㄚ", "sa"),
    ("ㄙㄜ", "se"),       ("ㄙㄞ", "sai"),      ("ㄙㄟ", "sei"),
    ("ㄙㄠ", "sao"),      ("ㄙㄡ", "sou"),      ("ㄙㄢ", "san"),
    ("ㄙㄣ", "sen"),      ("ㄙㄤ", "sang"),     ("ㄙㄥ", "seng"),
    ("ㄙㄨ", "su"),       ("ㄧㄚ", "ya"),       ("ㄧㄛ", "yo"),
    ("ㄧㄝ", "ye"),       ("ㄧㄞ", "yai"),      ("ㄧㄠ", "yao"),
    ("ㄧㄡ", "you"),      ("ㄧㄢ", "yan"),      ("ㄧㄣ", "yin"),
    ("ㄧㄤ", "yang"),     ("ㄧㄥ", "ying"),     ("ㄨㄚ", "wa"),
    ("ㄨㄛ", "wo"),       ("ㄨㄞ", "wai"),      ("ㄨㄟ", "wei"),
    ("ㄨㄢ", "wan"),      ("ㄨㄣ", "wen"),      ("ㄨㄤ", "wang"),
    ("ㄨㄥ", "weng"),     ("ㄩㄝ", "yue"),      ("ㄩㄢ", "yuan"),
    ("ㄩㄣ", "yun"),      ("ㄩㄥ", "yong"),
    ("ㄅ", "b"),          ("ㄆ", "p"),          ("ㄇ", "m"),
    ("ㄈ", "f"),          ("ㄉ", "d"),          ("ㄊ", "t"),
    ("ㄋ", "n"),          ("ㄌ", "l"),          ("ㄍ", "g"),
    ("ㄎ", "k"),          ("ㄏ", "h"),          ("ㄐ", "j"),
    ("ㄑ", "q"),          ("ㄒ", "x"),          ("ㄓ", "zhi"),
    ("ㄔ", "chi"),        ("ㄕ", "shi"),        ("ㄖ", "ri"),
    ("ㄗ", "zi"),         ("ㄘ", "ci"),         ("ㄙ", "si"),
    ("ㄚ", "a"),          ("ㄛ", "o"),          ("ㄜ", "e"),
    ("ㄝ", "eh"),         ("ㄞ", "ai"),         ("ㄟ", "ei"),
    ("ㄠ", "ao"),         ("ㄡ", "ou"),         ("ㄢ", "an"),
    ("ㄣ", "en"),         ("ㄤ", "ang"),        ("ㄥ", "eng"),
    ("ㄦ", "er"),         ("ㄧ", "yi"),         ("ㄨ", "wu"),
    ("ㄩ", "yu"),
];

pub static HANYU_TEXTBOOK_TONE_TABLE: &[(&str, &str)] = &[
    ("iang1", "iāng"), ("iang2", "iáng"), ("iang3", "iǎng"),
    ("iang4", "iàng"), ("iong1", "iōng"), ("iong2", "ióng"),
    ("iong3", "iǒng"), ("iong4", "iòng"), ("uang1", "uāng"),
    ("uang2", "uáng"), ("uang3", "uǎng"), ("uang4", "uàng"),
    ("uang5", "uang"),
    ("ang1", "āng"),   ("ang2", "áng"),   ("ang3", "ǎng"),
    ("ang4", "àng"),   ("ang5", "ang"),   ("eng1", "ēng"),
    ("eng2", "éng"),   ("eng3", "ěng"),   ("eng4", "èng"),
    ("ian1", "iān"),   ("ian2", "ián"),   ("ian3", "iǎn"),
    ("ian4", "iàn"),   ("iao1", "iāo"),   ("iao2", "iáo"),
    ("iao3", "iǎo"),   ("iao4", "iào"),   ("ing1", "īng"),
    ("ing2", "íng"),   ("ing3", "ǐng"),   ("ing4", "ìng"),
    ("ong1", "ōng"),   ("ong2", "óng"),   ("ong3", "ǒng"),
    ("ong4", "òng"),   ("uai1", "uāi"),   ("uai2", "uái"),
    ("uai3", "uǎi"),   ("uai4", "uài"),   ("uan1", "uān"),
    ("uan2", "uán"),   ("uan3", "uǎn"),   ("uan4", "uàn"),
    ("van2", "üán"),   ("van3", "üǎn"),
    ("ai1", "āi"),     ("ai2", "ái"),     ("ai3", "ǎi"),
    ("ai4", "ài"),     ("ai5", "ai"),     ("an1", "ān"),
    ("an2", "án"),     ("an3", "ǎn"),     ("an4", "àn"),
    ("ao1", "āo"),     ("ao2", "áo"),     ("ao3", "ǎo"),
    ("ao4", "ào"),     ("ao5", "ao"),     ("eh2", "ế"),
    ("eh3", "êˇ"),     ("eh4", "ề"),      ("eh5", "ê"),
    ("ei1", "ēi"),     ("ei2", "éi"),     ("ei3", "ěi"),
    ("ei4", "èi"),     ("ei5", "ei"),     ("en1", "ēn"),
    ("en2", "én"),     ("en3", "ěn"),     ("en4", "èn"),
    ("en5", "en"),     ("er1", "ēr"),     ("er2", "ér"),
    ("er3", "ěr"),     ("er4", "èr"),     ("er5", "er"),
    ("ia1", "iā"),     ("ia2", "iá"),     ("ia3", "iǎ"),
    ("ia4", "ià"),     ("ie1", "iē"),     ("ie2", "ié"),
    ("ie3", "iě"),     ("ie4", "iè"),     ("ie5", "ie"),
    ("in1", "īn"),     ("in2", "ín"),     ("in3", "ǐn"),
    ("in4", "ìn"),     ("iu1", "iū"),     ("iu2", "iú"),
    ("iu3", "iǔ"),     ("iu4", "iù"),     ("ou1", "ōu"),
    ("ou2", "óu"),     ("ou3", "ǒu"),     ("ou4", "òu"),
    ("ou5", "ou"),     ("ua1", "uā"),     ("ua2", "uá"),
    ("ua3", "uǎ"),     ("ua4", "uà"),     ("ue1", "uē"),
    ("ue2", "ué"),     ("ue3", "uě"),     ("ue4", "uè"),
    ("ui1", "uī"),     ("ui2", "uí"),     ("ui3", "uǐ"),
    ("ui4", "uì"),     ("un1", "ūn"),     ("un2", "ún"),
    ("un3", "ǔn"),     ("un4", "ùn"),     ("uo1", "uō"),
    ("uo2", "uó"),     ("uo3", "uǒ"),     ("uo4", "uò"),
    ("uo5", "uo"),     ("ve1", "üē"),     ("ve3", "üě"),
    ("ve4", "üè"),
    ("a1", "ā"),       ("a2", "á"),       ("a3", "ǎ"),
    ("a4", "à"),       ("a5", "a"),       ("e1", "ē"),
    ("e2", "é"),       ("e3", "ě"),       ("e4", "è"),
    ("e5", "e"),       ("i1", "ī"),       ("i2", "í"),
    ("i3", "ǐ"),       ("i4", "ì"),       ("i5", "i"),
    ("o1", "ō"),       ("o2", "ó"),       ("o3", "ǒ"),
    ("o4", "ò"),       ("o5", "o"),       ("u1", "ū"),
    ("u2", "ú"),       ("u3", "ǔ"),       ("u4", "ù"),
    ("v1", "ǖ"),       ("v2", "ǘ"),       ("v3", "ǚ"),
    ("v4", "ǜ"),
];

pub static HANYU_PINYIN_SYLLABLES: &[(&str, &str)] = &[
    ("chuang", "ㄔㄨㄤ"), ("shuang", "ㄕㄨㄤ"), ("zhuang", "ㄓㄨㄤ"),
    ("chang", "ㄔㄤ"),    ("cheng", "ㄔㄥ"),    ("chong", "ㄔㄨㄥ"),
    ("chuai", "ㄔㄨㄞ"),  ("chuan", "ㄔㄨㄢ"),  ("guang", "ㄍㄨㄤ"),
    ("huang", "ㄏㄨㄤ"),  ("jiang", "ㄐㄧㄤ"),  ("jiong", "ㄐㄩㄥ"),
    ("kiang", "ㄎㄧㄤ"),  ("kuang", "ㄎㄨㄤ"),  ("biang", "ㄅㄧㄤ"),
    ("duang", "ㄉㄨㄤ"),  ("liang", "ㄌㄧㄤ"),  ("niang", "ㄋㄧㄤ"),
    ("qiang", "ㄑㄧㄤ"),  ("qiong", "ㄑㄩㄥ"),  ("shang", "ㄕㄤ"),
    ("sheng", "ㄕㄥ"),    ("shuai", "ㄕㄨㄞ"),  ("shuan", "ㄕㄨㄢ"),
    ("xiang", "ㄒㄧㄤ"),  ("xiong", "ㄒㄩㄥ"),  ("zhang", "ㄓㄤ"),
    ("zheng", "ㄓㄥ"),    ("zhong", "ㄓㄨㄥ"),  ("zhuai", "ㄓㄨㄞ"),
    ("zhuan", "ㄓㄨㄢ"),  ("bang", "ㄅㄤ"),     ("beng", "ㄅㄥ"),
    ("bian", "ㄅㄧㄢ"),   ("biao", "ㄅㄧㄠ"),   ("bing", "ㄅㄧㄥ"),
    ("cang", "ㄘㄤ"),     ("ceng", "ㄘㄥ"),     ("chai", "ㄔㄞ"),
    ("chan", "ㄔㄢ"),     ("chao", "ㄔㄠ"),     ("chen", "ㄔㄣ"),
    ("chou", "ㄔㄡ"),     ("chua", "ㄔㄨㄚ"),   ("chui", "ㄔㄨㄟ"),
    ("chun", "ㄔㄨㄣ"),   ("chuo", "ㄔㄨㄛ"),   ("cong", "ㄘㄨㄥ"),
    ("cuan", "ㄘㄨㄢ"),   ("dang", "ㄉㄤ"),     ("deng", "ㄉㄥ"),
    ("dian", "ㄉㄧㄢ"),   ("diao", "ㄉㄧㄠ"),   ("ding", "ㄉㄧㄥ"),
    ("dong", "ㄉㄨㄥ"),   ("duan", "ㄉㄨㄢ"),   ("fang", "ㄈㄤ"),
    ("feng", "ㄈㄥ"),     ("fiao", "ㄈㄧㄠ"),   ("fong", "ㄈㄨㄥ"),
    ("gang", "ㄍㄤ"),     ("geng", "ㄍㄥ"),     ("giao", "ㄍㄧㄠ"),
    ("gong", "ㄍㄨㄥ"),   ("guai", "ㄍㄨㄞ"),   ("guan", "ㄍㄨㄢ"),
    ("hang", "ㄏㄤ"),     ("heng", "ㄏㄥ"),     ("hong", "ㄏㄨㄥ"),
    ("huai", "ㄏㄨㄞ"),   ("huan", "ㄏㄨㄢ"),   ("jian", "ㄐㄧㄢ"),
    ("jiao", "ㄐㄧㄠ"),   ("jing", "ㄐㄧㄥ"),   ("juan", "ㄐㄩㄢ"),
    ("kang", "ㄎㄤ"),     ("keng", "ㄎㄥ"),     ("kong", "ㄎㄨㄥ"),
    ("kuai", "ㄎㄨㄞ"),   ("kuan", "ㄎㄨㄢ"),   ("lang", "ㄌㄤ"),
    ("leng", "ㄌㄥ"),     ("lian", "ㄌㄧㄢ"),   ("liao", "ㄌㄧㄠ"),
    ("ling", "ㄌㄧㄥ"),   ("long", "ㄌㄨㄥ"),   ("luan", "ㄌㄨㄢ"),
    ("lvan", "ㄌㄩㄢ"),   ("mang", "ㄇㄤ"),     ("meng", "ㄇㄥ"),
    ("mian", "ㄇㄧㄢ"),   ("miao", "ㄇㄧㄠ"),   ("ming", "ㄇㄧㄥ"),
    ("nang", "ㄋㄤ"),     ("neng", "ㄋㄥ"),     ("nian", "ㄋㄧㄢ"),
    ("niao", "ㄋㄧㄠ"),   ("ning", "ㄋㄧㄥ"),   ("nong", "ㄋㄨㄥ"),
    ("nuan", "ㄋㄨㄢ"),   ("pang", "ㄆㄤ"),     ("peng", "ㄆㄥ"),
    ("pian", "ㄆㄧㄢ"),   ("piao", "ㄆㄧㄠ"),   ("ping", "ㄆㄧㄥ"),
    ("qian", "ㄑㄧㄢ"),   ("qiao", "ㄑㄧㄠ"),   ("qing", "ㄑㄧㄥ"),
    ("quan", "ㄑㄩㄢ"),   ("rang", "ㄖㄤ"),     ("reng", "ㄖㄥ"),
    ("rong", "ㄖㄨㄥ"),   ("ruan", "ㄖㄨㄢ"),   ("sang", "ㄙㄤ"),
    ("seng", "ㄙㄥ"),     ("shai", "ㄕㄞ"),     ("shan", "ㄕㄢ"),
    ("shao", "ㄕㄠ"),     ("shei", "ㄕㄟ"),     ("shen", "ㄕㄣ"),
    ("shou", "ㄕㄡ"),     ("shua", "ㄕㄨㄚ"),   ("shui", "ㄕㄨㄟ"),
    ("shun", "ㄕㄨㄣ"),   ("shuo", "ㄕㄨㄛ"),   ("song", "ㄙㄨㄥ"),
    ("suan", "ㄙㄨㄢ"),   ("tang", "ㄊㄤ"),     ("teng", "ㄊㄥ"),
    ("tian", "ㄊㄧㄢ"),   ("tiao", "ㄊㄧㄠ"),   ("ting", "ㄊㄧㄥ"),
    ("tong", "ㄊㄨㄥ"),   ("tuan", "ㄊㄨㄢ"),   ("wang", "ㄨㄤ"),
    ("weng", "ㄨㄥ"),     ("xian", "ㄒㄧㄢ"),   ("xiao", "ㄒㄧㄠ"),
    ("xing", "ㄒㄧㄥ"),   ("xuan", "ㄒㄩㄢ"),   ("yang", "ㄧㄤ"),
    ("ying", "ㄧㄥ"),     ("yong", "ㄩㄥ"),     ("yuan", "ㄩㄢ"),
    ("zang", "ㄗㄤ"),     ("zeng", "ㄗㄥ"),     ("zhai", "ㄓㄞ"),
    ("zhan", "ㄓㄢ"),     ("zhao", "ㄓㄠ"),     ("zhei", "ㄓㄟ"),
    ("zhen", "ㄓㄣ"),     ("zhou", "ㄓㄡ"),     ("zhua", "ㄓㄨㄚ"),
    ("zhui", "ㄓㄨㄟ"),   ("zhun", "ㄓㄨㄣ"),   ("zhuo", "ㄓㄨㄛ"),
    ("zong", "ㄗㄨㄥ"),   ("zuan", "ㄗㄨㄢ"),   ("jun", "ㄐㄩㄣ"),
    ("ang", "ㄤ"),        ("bai", "ㄅㄞ"),      ("ban", "ㄅㄢ"),
    ("bao", "ㄅㄠ"),      ("bei", "ㄅㄟ"),      ("ben", "ㄅㄣ"),
    ("bie", "ㄅㄧㄝ"),    ("bin", "ㄅㄧㄣ"),    ("cai", "ㄘㄞ"),
    ("can", "ㄘㄢ"),      ("cao", "ㄘㄠ"),      ("cei", "ㄘㄟ"),
    ("cen", "ㄘㄣ"),      ("cha", "ㄔㄚ"),      ("che", "ㄔㄜ"),
    ("chi", "ㄔ"),        ("chu", "ㄔㄨ"),      ("cou", "ㄘㄡ"),
    ("cui", "ㄘㄨㄟ"),    ("cun", "ㄘㄨㄣ"),    ("cuo", "ㄘㄨㄛ"),
    ("dai", "ㄉㄞ"),      ("dan", "ㄉㄢ"),      ("dao", "ㄉㄠ"),
    ("dei", "ㄉㄟ"),      ("den", "ㄉㄣ"),      ("dia", "ㄉㄧㄚ"),
    ("die", "ㄉㄧㄝ"),    ("diu", "ㄉㄧㄡ"),    ("dou", "ㄉㄡ"),
    ("dui", "ㄉㄨㄟ"),    ("dun", "ㄉㄨㄣ"),    ("duo", "ㄉㄨㄛ"),
    ("eng", "ㄥ"),        ("fan", "ㄈㄢ"),      ("fei", "ㄈㄟ"),
    ("fen", "ㄈㄣ"),      ("fou", "ㄈㄡ"),      ("gai", "ㄍㄞ"),
    ("gan", "ㄍㄢ"),      ("gao", "ㄍㄠ"),      ("gei", "ㄍㄟ"),
    ("gin", "ㄍㄧㄣ"),    ("gen", "ㄍㄣ"),      ("gou", "ㄍㄡ"),
    ("gua", "ㄍㄨㄚ"),    ("gue", "ㄍㄨㄜ"),    ("gui", "ㄍㄨㄟ"),
    ("gun", "ㄍㄨㄣ"),    ("guo", "ㄍㄨㄛ"),    ("hai", "ㄏㄞ"),
    ("han", "ㄏㄢ"),      ("hao", "ㄏㄠ"),      ("hei", "ㄏㄟ"),
    ("hen", "ㄏㄣ"),      ("hou", "ㄏㄡ"),      ("hua", "ㄏㄨㄚ"),
    ("hui", "ㄏㄨㄟ"),    ("hun", "ㄏㄨㄣ"),    ("huo", "ㄏㄨㄛ"),
    ("jia", "ㄐㄧㄚ"),    ("jie", "ㄐㄧㄝ"),    ("jin", "ㄐㄧㄣ"),
    ("jiu", "ㄐㄧㄡ"),    ("jue", "ㄐㄩㄝ"),    ("kai", "ㄎㄞ"),
    ("kan", "ㄎㄢ"),      ("kao", "ㄎㄠ"),      ("ken", "ㄎㄣ"),
    ("kiu", "ㄎㄧㄡ"),    ("kou", "ㄎㄡ"),      ("kua", "ㄎㄨㄚ"),
    ("kui", "ㄎㄨㄟ"),    ("kun", "ㄎㄨㄣ"),    ("kuo", "ㄎㄨㄛ"),
    ("lai", "ㄌㄞ"),      ("lan", "ㄌㄢ"),      ("lao", "ㄌㄠ"),
    ("lei", "ㄌㄟ"),      ("lia", "ㄌㄧㄚ"),    ("lie", "ㄌㄧㄝ"),
    ("lin", "ㄌㄧㄣ"),    ("liu", "ㄌㄧㄡ"),    ("lou", "ㄌㄡ"),
    ("lun", "ㄌㄨㄣ"),    ("luo", "ㄌㄨㄛ"),    ("lve", "ㄌㄩㄝ"),
    ("mai", "ㄇㄞ"),      ("man", "ㄇㄢ"),      ("mao", "ㄇㄠ"),
    ("mei", "ㄇㄟ"),      ("men", "ㄇㄣ"),      ("mie", "ㄇㄧㄝ"),
    ("min", "ㄇㄧㄣ"),    ("miu", "ㄇㄧㄡ"),    ("mou", "ㄇㄡ"),
    ("nai", "ㄋㄞ"),      ("nan", "ㄋㄢ"),      ("nao", "ㄋㄠ"),
    ("nei", "ㄋㄟ"),      ("nen", "ㄋㄣ"),      ("nie", "ㄋㄧㄝ"),
    ("nin", "ㄋㄧㄣ"),    ("niu", "ㄋㄧㄡ"),    ("nou", "ㄋㄡ"),
    ("nui", "ㄋㄨㄟ"),    ("nun", "ㄋㄨㄣ"),    ("nuo", "ㄋㄨㄛ"),
    ("nve", "ㄋㄩㄝ"),    ("pai", "ㄆㄞ"),      ("pan", "ㄆㄢ"),
    ("pao", "ㄆㄠ"),      ("pei", "ㄆㄟ"),      ("pen", "ㄆㄣ"),
    ("pia", "ㄆㄧㄚ"),    ("pie", "ㄆㄧㄝ"),    ("pin", "ㄆㄧㄣ"),
    ("pou", "ㄆㄡ"),      ("qia", "ㄑㄧㄚ"),    ("qie", "ㄑㄧㄝ"),
    ("qin", "ㄑㄧㄣ"),    ("qiu", "ㄑㄧㄡ"),    ("que", "ㄑㄩㄝ"),
    ("qun", "ㄑㄩㄣ"),    ("ran", "ㄖㄢ"),      ("rao", "ㄖㄠ"),
    ("ren", "ㄖㄣ"),      ("rou", "ㄖㄡ"),      ("rui", "ㄖㄨㄟ"),
    ("run", "ㄖㄨㄣ"),    ("ruo", "ㄖㄨㄛ"),    ("sai", "ㄙㄞ"),
    ("san", "ㄙㄢ"),      ("sao", "ㄙㄠ"),      ("sei", "ㄙㄟ"),
    ("sen", "ㄙㄣ"),      ("sha", "ㄕㄚ"),      ("she", "ㄕㄜ"),
    ("shi", "ㄕ"),        ("shu", "ㄕㄨ"),      ("sou", "ㄙㄡ"),
    ("sui", "ㄙㄨㄟ"),    ("sun", "ㄙㄨㄣ"),    ("suo", "ㄙㄨㄛ"),
    ("tai", "ㄊㄞ"),      ("tan", "ㄊㄢ"),      ("tao", "ㄊㄠ"),
    ("tie", "ㄊㄧㄝ"),    ("tou", "ㄊㄡ"),      ("tui", "ㄊㄨㄟ"),
    ("tun", "ㄊㄨㄣ"),    ("tuo", "ㄊㄨㄛ"),    ("wai", "ㄨㄞ"),
    ("wan", "ㄨㄢ"),      ("wei", "ㄨㄟ"),      ("wen", "ㄨㄣ"),
    ("xia", "ㄒㄧㄚ"),    ("xie", "ㄒㄧㄝ"),    ("xin", "ㄒㄧㄣ"),
    ("xiu", "ㄒㄧㄡ"),    ("xue", "ㄒㄩㄝ"),    ("xun", "ㄒㄩㄣ"),
    ("yai", "ㄧㄞ"),      ("yan", "ㄧㄢ"),      ("yao", "ㄧㄠ"),
    ("yin", "ㄧㄣ"),      ("you", "ㄧㄡ"),      ("yue", "ㄩㄝ"),
    ("yun", "ㄩㄣ"),      ("zai", "ㄗㄞ"),      ("zan", "ㄗㄢ"),
    ("zao", "ㄗㄠ"),      ("zei", "ㄗㄟ"),      ("zen", "ㄗㄣ"),
    ("zha", "ㄓㄚ"),      ("zhe", "ㄓㄜ"),      ("zhi", "ㄓ"),
    ("zhu", "ㄓㄨ"),      ("zou", "ㄗㄡ"),      ("zui", "ㄗㄨㄟ"),
    ("zun", "ㄗㄨㄣ"),    ("zuo", "ㄗㄨㄛ"),    ("ai", "ㄞ"),
    ("an", "ㄢ"),         ("ao", "ㄠ"),         ("ba", "ㄅㄚ"),
    ("bi", "ㄅㄧ"),       ("bo", "ㄅㄛ"),       ("bu", "ㄅㄨ"),
    ("ca", "ㄘㄚ"),       ("ce", "ㄘㄜ"),       ("ci", "ㄘ"),
    ("cu", "ㄘㄨ"),       ("da", "ㄉㄚ"),       ("de", "ㄉㄜ"),
    ("di", "ㄉㄧ"),       ("du", "ㄉㄨ"),       ("eh", "ㄝ"),
    ("ei", "ㄟ"),         ("en", "ㄣ"),         ("er", "ㄦ"),
    ("fa", "ㄈㄚ"),       ("fo", "ㄈㄛ"),       ("fu", "ㄈㄨ"),
    ("ga", "ㄍㄚ"),       ("ge", "ㄍㄜ"),       ("gi", "ㄍㄧ"),
    ("gu", "ㄍㄨ"),       ("ha", "ㄏㄚ"),       ("he", "ㄏㄜ"),
    ("hu", "ㄏㄨ"),       ("ji", "ㄐㄧ"),       ("ju", "ㄐㄩ"),
    ("ka", "ㄎㄚ"),       ("ke", "ㄎㄜ"),       ("ku", "ㄎㄨ"),
    ("la", "ㄌㄚ"),       ("le", "ㄌㄜ"),       ("li", "ㄌㄧ"),
    ("lo", "ㄌㄛ"),       ("lu", "ㄌㄨ"),       ("lv", "ㄌㄩ"),
    ("ma", "ㄇㄚ"),       ("me", "ㄇㄜ"),       ("mi", "ㄇㄧ"),
    ("mo", "ㄇㄛ"),       ("mu", "ㄇㄨ"),       ("na", "ㄋㄚ"),
    ("ne", "ㄋㄜ"),       ("ni", "ㄋㄧ"),       ("nu", "ㄋㄨ"),
    ("nv", "ㄋㄩ"),       ("ou", "ㄡ"),         ("pa", "ㄆㄚ"),
    ("pi", "ㄆㄧ"),       ("po", "ㄆㄛ"),       ("pu", "ㄆㄨ"),
    ("qi", "ㄑㄧ"),       ("qu", "ㄑㄩ"),       ("re", "ㄖㄜ"),
    ("ri", "ㄖ"),         ("ru", "ㄖㄨ"),       ("sa", "ㄙㄚ"),
    ("se", "ㄙㄜ"),       ("si", "ㄙ"),         ("su", "ㄙㄨ"),
    ("ta", "ㄊㄚ"),       ("te", "ㄊㄜ"),       ("ti", "ㄊㄧ"),
    ("tu", "ㄊㄨ"),       ("wa", "ㄨㄚ"),       ("wo", "ㄨㄛ"),
    ("wu", "ㄨ"),         ("xi", "ㄒㄧ"),       ("xu", "ㄒㄩ"),
    ("ya", "ㄧㄚ"),       ("ye", "ㄧㄝ"),       ("yi", "ㄧ"),
    ("yo", "ㄧㄛ"),       ("yu", "ㄩ"),         ("za", "ㄗㄚ"),
    ("ze", "ㄗㄜ"),       ("zi", "ㄗ"),         ("zu", "ㄗㄨ"),
    ("a", "ㄚ"),          ("e", "ㄜ"),          ("o", "ㄛ"),
    ("q", "ㄑ"),
];


/// Hanyu-Pinyin syllable → Bopomofo lookup over the canonical table.
pub static HANYU_PINYIN_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HANYU_PINYIN_SYLLABLES.iter().copied().collect());

static HANYU_SYLLABLES_BY_LENGTH: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut pairs: Vec<_> = HANYU_PINYIN_SYLLABLES.to_vec();
    pairs.sort_by_key(|(key, _)| std::cmp::Reverse(key.len()));
    pairs
});

fn replace_all(target: &str, rules: &[(&str, &str)]) -> String {
    let mut out = target.to_string();
    for (from, to) in rules {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}

/// Numeric-tone Hanyu Pinyin for a Bopomofo reading. Tone 1 must be the
/// trailing space, as produced by the composer's raw value.
pub fn phona_to_hanyu_pinyin(target: &str) -> String {
    replace_all(target, PHONA_TO_HANYU_PINYIN)
}

/// Numeric-tone Hanyu Pinyin rewritten with textbook diacritics
/// (`zhong1` → `zhōng`; a trailing `5` marks the neutral tone and is
/// dropped).
pub fn hanyu_pinyin_to_textbook_style(target: &str) -> String {
    replace_all(target, HANYU_TEXTBOOK_TONE_TABLE)
}

/// Textbook Bopomofo writes the neutral tone first: a trailing `˙` moves to
/// the front of the reading.
pub fn phona_to_textbook_style(target: &str) -> String {
    match target.strip_suffix('˙') {
        Some(rest) => format!("˙{rest}"),
        None => target.to_string(),
    }
}

/// Appends the numeric tone 1 to a reading that carries no tone mark.
pub fn restore_tone_one(target: &str) -> String {
    let toned = ["ˊ", "ˇ", "ˋ", "˙"].iter().any(|t| target.contains(t));
    if toned {
        target.to_string()
    } else {
        format!("{target}1")
    }
}

/// Bopomofo for a numeric-toned Hanyu-Pinyin string. `new_tone_one` is the
/// mark substituted for the numeric tone 1 (commonly empty or a space).
///
/// Strings containing `_` or anything outside `[A-Za-z0-9]` are not
/// numeric-toned pinyin and come back unchanged.
pub fn hanyu_pinyin_to_phona(target: &str, new_tone_one: &str) -> String {
    if target.contains('_') || target.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return target.to_string();
    }
    let mut out = target.to_string();
    for (pinyin, phona) in HANYU_SYLLABLES_BY_LENGTH.iter() {
        if out.contains(pinyin) {
            out = out.replace(pinyin, phona);
        }
    }
    for (key, tone) in TONE_KEYS {
        if *key == " " {
            continue;
        }
        let mark = if *key == "1" { new_tone_one } else { tone };
        if out.contains(key) {
            out = out.replace(key, mark);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phona_to_numeric_pinyin() {
        assert_eq!(phona_to_hanyu_pinyin("ㄓㄨㄥ "), "zhong1");
        assert_eq!(phona_to_hanyu_pinyin("ㄌㄧㄣˊ"), "lin2");
        assert_eq!(phona_to_hanyu_pinyin("ㄩㄝˋ"), "yue4");
        assert_eq!(phona_to_hanyu_pinyin("ㄇㄚ˙"), "ma5");
        // a bare symbol still converts
        assert_eq!(phona_to_hanyu_pinyin("ㄓ"), "zhi");
    }

    #[test]
    fn numeric_pinyin_to_textbook_diacritics() {
        assert_eq!(hanyu_pinyin_to_textbook_style("zhong1"), "zhōng");
        assert_eq!(hanyu_pinyin_to_textbook_style("lin2"), "lín");
        assert_eq!(hanyu_pinyin_to_textbook_style("ma5"), "ma");
        assert_eq!(hanyu_pinyin_to_textbook_style("lv3"), "lǚ");
    }

    #[test]
    fn textbook_bopomofo_moves_neutral_tone() {
        assert_eq!(phona_to_textbook_style("ㄇㄚ˙"), "˙ㄇㄚ");
        assert_eq!(phona_to_textbook_style("ㄇㄚˇ"), "ㄇㄚˇ");
        assert_eq!(phona_to_textbook_style(""), "");
    }

    #[test]
    fn tone_one_restoration() {
        assert_eq!(restore_tone_one("ㄓㄨㄥ"), "ㄓㄨㄥ1");
        assert_eq!(restore_tone_one("ㄌㄧㄣˊ"), "ㄌㄧㄣˊ");
        assert_eq!(restore_tone_one("ㄇㄚ˙"), "ㄇㄚ˙");
    }

    #[test]
    fn numeric_pinyin_to_phona() {
        assert_eq!(hanyu_pinyin_to_phona("zhong1", ""), "ㄓㄨㄥ");
        assert_eq!(hanyu_pinyin_to_phona("zhong1", " "), "ㄓㄨㄥ ");
        assert_eq!(hanyu_pinyin_to_phona("lin2", ""), "ㄌㄧㄣˊ");
        assert_eq!(hanyu_pinyin_to_phona("yue4", ""), "ㄩㄝˋ");
    }

    #[test]
    fn non_pinyin_input_passes_through() {
        assert_eq!(hanyu_pinyin_to_phona("ㄓㄨㄥ", ""), "ㄓㄨㄥ");
        assert_eq!(hanyu_pinyin_to_phona("zhong_1", ""), "zhong_1");
        assert_eq!(hanyu_pinyin_to_phona("zhong 1", ""), "zhong 1");
    }

    #[test]
    fn round_trip_through_numeric_pinyin() {
        for reading in ["ㄓㄨㄥ", "ㄅㄧㄤ", "ㄋㄩㄝ", "ㄦ", "ㄒㄩㄥ"] {
            let pinyin = phona_to_hanyu_pinyin(&format!("{reading} "));
            let back = hanyu_pinyin_to_phona(&pinyin, " ");
            assert_eq!(back, format!("{reading} "), "via {pinyin:?}");
        }
    }
}
