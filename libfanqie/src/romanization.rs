//! Romanization syllable tables.
//!
//! On romanization layouts, whole buffered syllables are looked up here and
//! expanded into Bopomofo symbols; individual keys never map to symbols.
//! The Hanyu table doubles as the transcoding table and lives in
//! [`libfanqie_core::pinyin`].

use std::collections::HashMap;

use libfanqie_core::pinyin::HANYU_PINYIN_MAP;
use once_cell::sync::Lazy;

use crate::layout::MandarinLayout;

pub static SECONDARY_PINYIN_SYLLABLES: &[(&str, &str)] = &[
    ("chuang", "ㄔㄨㄤ"), ("shuang", "ㄕㄨㄤ"), ("chiang", "ㄑㄧㄤ"),
    ("chiung", "ㄑㄩㄥ"), ("chiuan", "ㄑㄩㄢ"), ("shiang", "ㄒㄧㄤ"),
    ("shiung", "ㄒㄩㄥ"), ("shiuan", "ㄒㄩㄢ"), ("biang", "ㄅㄧㄤ"),
    ("duang", "ㄉㄨㄤ"),  ("juang", "ㄓㄨㄤ"),  ("jiang", "ㄐㄧㄤ"),
    ("jiung", "ㄐㄩㄥ"),  ("niang", "ㄋㄧㄤ"),  ("liang", "ㄌㄧㄤ"),
    ("guang", "ㄍㄨㄤ"),  ("kuang", "ㄎㄨㄤ"),  ("huang", "ㄏㄨㄤ"),
    ("chang", "ㄔㄤ"),    ("cheng", "ㄔㄥ"),    ("chuai", "ㄔㄨㄞ"),
    ("chuan", "ㄔㄨㄢ"),  ("chung", "ㄔㄨㄥ"),  ("shang", "ㄕㄤ"),
    ("sheng", "ㄕㄥ"),    ("shuai", "ㄕㄨㄞ"),  ("shuan", "ㄕㄨㄢ"),
    ("jiuan", "ㄐㄩㄢ"),  ("chiau", "ㄑㄧㄠ"),  ("chian", "ㄑㄧㄢ"),
    ("ching", "ㄑㄧㄥ"),  ("shing", "ㄒㄧㄥ"),  ("tzang", "ㄗㄤ"),
    ("tzeng", "ㄗㄥ"),    ("tzuan", "ㄗㄨㄢ"),  ("tzung", "ㄗㄨㄥ"),
    ("tsang", "ㄘㄤ"),    ("tseng", "ㄘㄥ"),    ("tsuan", "ㄘㄨㄢ"),
    ("tsung", "ㄘㄨㄥ"),  ("chiue", "ㄑㄩㄝ"),  ("liuan", "ㄌㄩㄢ"),
    ("chuei", "ㄔㄨㄟ"),  ("chuen", "ㄔㄨㄣ"),  ("shuei", "ㄕㄨㄟ"),
    ("shuen", "ㄕㄨㄣ"),  ("chiou", "ㄑㄧㄡ"),  ("chiun", "ㄑㄩㄣ"),
    ("tzuei", "ㄗㄨㄟ"),  ("tzuen", "ㄗㄨㄣ"),  ("tsuei", "ㄘㄨㄟ"),
    ("tsuen", "ㄘㄨㄣ"),  ("kiang", "ㄎㄧㄤ"),  ("shiau", "ㄒㄧㄠ"),
    ("shian", "ㄒㄧㄢ"),  ("shiue", "ㄒㄩㄝ"),  ("shiou", "ㄒㄧㄡ"),
    ("shiun", "ㄒㄩㄣ"),  ("jang", "ㄓㄤ"),     ("jeng", "ㄓㄥ"),
    ("juai", "ㄓㄨㄞ"),   ("juan", "ㄓㄨㄢ"),   ("jung", "ㄓㄨㄥ"),
    ("jiau", "ㄐㄧㄠ"),   ("jian", "ㄐㄧㄢ"),   ("jing", "ㄐㄧㄥ"),
    ("jiue", "ㄐㄩㄝ"),   ("chie", "ㄑㄧㄝ"),   ("bang", "ㄅㄤ"),
    ("beng", "ㄅㄥ"),     ("biau", "ㄅㄧㄠ"),   ("bian", "ㄅㄧㄢ"),
    ("bing", "ㄅㄧㄥ"),   ("pang", "ㄆㄤ"),     ("peng", "ㄆㄥ"),
    ("piau", "ㄆㄧㄠ"),   ("pian", "ㄆㄧㄢ"),   ("ping", "ㄆㄧㄥ"),
    ("mang", "ㄇㄤ"),     ("meng", "ㄇㄥ"),     ("miau", "ㄇㄧㄠ"),
    ("mian", "ㄇㄧㄢ"),   ("ming", "ㄇㄧㄥ"),   ("fang", "ㄈㄤ"),
    ("feng", "ㄈㄥ"),     ("fiau", "ㄈㄧㄠ"),   ("dang", "ㄉㄤ"),
    ("deng", "ㄉㄥ"),     ("diau", "ㄉㄧㄠ"),   ("dian", "ㄉㄧㄢ"),
    ("ding", "ㄉㄧㄥ"),   ("duan", "ㄉㄨㄢ"),   ("dung", "ㄉㄨㄥ"),
    ("tang", "ㄊㄤ"),     ("teng", "ㄊㄥ"),     ("tiau", "ㄊㄧㄠ"),
    ("tian", "ㄊㄧㄢ"),   ("ting", "ㄊㄧㄥ"),   ("tuan", "ㄊㄨㄢ"),
    ("tung", "ㄊㄨㄥ"),   ("nang", "ㄋㄤ"),     ("neng", "ㄋㄥ"),
    ("niau", "ㄋㄧㄠ"),   ("nian", "ㄋㄧㄢ"),   ("ning", "ㄋㄧㄥ"),
    ("nuan", "ㄋㄨㄢ"),   ("nung", "ㄋㄨㄥ"),   ("lang", "ㄌㄤ"),
    ("leng", "ㄌㄥ"),     ("liau", "ㄌㄧㄠ"),   ("lian", "ㄌㄧㄢ"),
    ("ling", "ㄌㄧㄥ"),   ("luan", "ㄌㄨㄢ"),   ("lung", "ㄌㄨㄥ"),
    ("gang", "ㄍㄤ"),     ("geng", "ㄍㄥ"),     ("guai", "ㄍㄨㄞ"),
    ("guan", "ㄍㄨㄢ"),   ("gung", "ㄍㄨㄥ"),   ("kang", "ㄎㄤ"),
    ("keng", "ㄎㄥ"),     ("kuai", "ㄎㄨㄞ"),   ("kuan", "ㄎㄨㄢ"),
    ("kung", "ㄎㄨㄥ"),   ("hang", "ㄏㄤ"),     ("heng", "ㄏㄥ"),
    ("huai", "ㄏㄨㄞ"),   ("huan", "ㄏㄨㄢ"),   ("hung", "ㄏㄨㄥ"),
    ("juei", "ㄓㄨㄟ"),   ("juen", "ㄓㄨㄣ"),   ("chai", "ㄔㄞ"),
    ("chau", "ㄔㄠ"),     ("chou", "ㄔㄡ"),     ("chan", "ㄔㄢ"),
    ("chen", "ㄔㄣ"),     ("chua", "ㄔㄨㄚ"),   ("shai", "ㄕㄞ"),
    ("shei", "ㄕㄟ"),     ("shau", "ㄕㄠ"),     ("shou", "ㄕㄡ"),
    ("shan", "ㄕㄢ"),     ("shen", "ㄕㄣ"),     ("shua", "ㄕㄨㄚ"),
    ("shuo", "ㄕㄨㄛ"),   ("rang", "ㄖㄤ"),     ("reng", "ㄖㄥ"),
    ("ruan", "ㄖㄨㄢ"),   ("rung", "ㄖㄨㄥ"),   ("sang", "ㄙㄤ"),
    ("seng", "ㄙㄥ"),     ("suan", "ㄙㄨㄢ"),   ("sung", "ㄙㄨㄥ"),
    ("yang", "ㄧㄤ"),     ("ying", "ㄧㄥ"),     ("wang", "ㄨㄤ"),
    ("weng", "ㄨㄥ"),     ("yuan", "ㄩㄢ"),     ("yung", "ㄩㄥ"),
    ("niue", "ㄋㄩㄝ"),   ("liue", "ㄌㄩㄝ"),   ("guei", "ㄍㄨㄟ"),
    ("kuei", "ㄎㄨㄟ"),   ("jiou", "ㄐㄧㄡ"),   ("jiun", "ㄐㄩㄣ"),
    ("chia", "ㄑㄧㄚ"),   ("chin", "ㄑㄧㄣ"),   ("shin", "ㄒㄧㄣ"),
    ("tzai", "ㄗㄞ"),     ("tzei", "ㄗㄟ"),     ("tzau", "ㄗㄠ"),
    ("tzou", "ㄗㄡ"),     ("tzan", "ㄗㄢ"),     ("tzen", "ㄗㄣ"),
    ("tsai", "ㄘㄞ"),     ("tsau", "ㄘㄠ"),     ("tsou", "ㄘㄡ"),
    ("tsan", "ㄘㄢ"),     ("tsen", "ㄘㄣ"),     ("chuo", "ㄔㄨㄛ"),
    ("miou", "ㄇㄧㄡ"),   ("diou", "ㄉㄧㄡ"),   ("duei", "ㄉㄨㄟ"),
    ("duen", "ㄉㄨㄣ"),   ("tuei", "ㄊㄨㄟ"),   ("tuen", "ㄊㄨㄣ"),
    ("niou", "ㄋㄧㄡ"),   ("nuei", "ㄋㄨㄟ"),   ("nuen", "ㄋㄨㄣ"),
    ("liou", "ㄌㄧㄡ"),   ("luen", "ㄌㄨㄣ"),   ("guen", "ㄍㄨㄣ"),
    ("kuen", "ㄎㄨㄣ"),   ("huei", "ㄏㄨㄟ"),   ("huen", "ㄏㄨㄣ"),
    ("ruei", "ㄖㄨㄟ"),   ("ruen", "ㄖㄨㄣ"),   ("tzuo", "ㄗㄨㄛ"),
    ("tsuo", "ㄘㄨㄛ"),   ("suei", "ㄙㄨㄟ"),   ("suen", "ㄙㄨㄣ"),
    ("chiu", "ㄑㄩ"),     ("giau", "ㄍㄧㄠ"),   ("shie", "ㄒㄧㄝ"),
    ("shia", "ㄒㄧㄚ"),   ("shiu", "ㄒㄩ"),     ("jie", "ㄐㄧㄝ"),
    ("jai", "ㄓㄞ"),      ("jei", "ㄓㄟ"),      ("jau", "ㄓㄠ"),
    ("jou", "ㄓㄡ"),      ("jan", "ㄓㄢ"),      ("jen", "ㄓㄣ"),
    ("jua", "ㄓㄨㄚ"),    ("bie", "ㄅㄧㄝ"),    ("pie", "ㄆㄧㄝ"),
    ("mie", "ㄇㄧㄝ"),    ("die", "ㄉㄧㄝ"),    ("tie", "ㄊㄧㄝ"),
    ("nie", "ㄋㄧㄝ"),    ("lie", "ㄌㄧㄝ"),    ("jia", "ㄐㄧㄚ"),
    ("jin", "ㄐㄧㄣ"),    ("chr", "ㄔ"),        ("shr", "ㄕ"),
    ("yue", "ㄩㄝ"),      ("juo", "ㄓㄨㄛ"),    ("bai", "ㄅㄞ"),
    ("bei", "ㄅㄟ"),      ("bau", "ㄅㄠ"),      ("ban", "ㄅㄢ"),
    ("ben", "ㄅㄣ"),      ("bin", "ㄅㄧㄣ"),    ("pai", "ㄆㄞ"),
    ("pei", "ㄆㄟ"),      ("pau", "ㄆㄠ"),      ("pou", "ㄆㄡ"),
    ("pan", "ㄆㄢ"),      ("pen", "ㄆㄣ"),      ("pia", "ㄆㄧㄚ"),
    ("pin", "ㄆㄧㄣ"),    ("mai", "ㄇㄞ"),      ("mei", "ㄇㄟ"),
    ("mau", "ㄇㄠ"),      ("mou", "ㄇㄡ"),      ("man", "ㄇㄢ"),
    ("men", "ㄇㄣ"),      ("min", "ㄇㄧㄣ"),    ("fei", "ㄈㄟ"),
    ("fou", "ㄈㄡ"),      ("fan", "ㄈㄢ"),      ("fen", "ㄈㄣ"),
    ("dai", "ㄉㄞ"),      ("dei", "ㄉㄟ"),      ("dau", "ㄉㄠ"),
    ("dou", "ㄉㄡ"),      ("dan", "ㄉㄢ"),      ("den", "ㄉㄣ"),
    ("dia", "ㄉㄧㄚ"),    ("tai", "ㄊㄞ"),      ("tau", "ㄊㄠ"),
    ("tou", "ㄊㄡ"),      ("tan", "ㄊㄢ"),      ("nai", "ㄋㄞ"),
    ("nei", "ㄋㄟ"),      ("nau", "ㄋㄠ"),      ("nou", "ㄋㄡ"),
    ("nan", "ㄋㄢ"),      ("nen", "ㄋㄣ"),      ("nin", "ㄋㄧㄣ"),
    ("lai", "ㄌㄞ"),      ("lei", "ㄌㄟ"),      ("lau", "ㄌㄠ"),
    ("lou", "ㄌㄡ"),      ("lan", "ㄌㄢ"),      ("lia", "ㄌㄧㄚ"),
    ("lin", "ㄌㄧㄣ"),    ("gai", "ㄍㄞ"),      ("gei", "ㄍㄟ"),
    ("gau", "ㄍㄠ"),      ("gou", "ㄍㄡ"),      ("gan", "ㄍㄢ"),
    ("gen", "ㄍㄣ"),      ("gua", "ㄍㄨㄚ"),    ("guo", "ㄍㄨㄛ"),
    ("gue", "ㄍㄨㄜ"),    ("kai", "ㄎㄞ"),      ("kau", "ㄎㄠ"),
    ("kou", "ㄎㄡ"),      ("kan", "ㄎㄢ"),      ("ken", "ㄎㄣ"),
    ("kua", "ㄎㄨㄚ"),    ("kuo", "ㄎㄨㄛ"),    ("hai", "ㄏㄞ"),
    ("hei", "ㄏㄟ"),      ("hau", "ㄏㄠ"),      ("hou", "ㄏㄡ"),
    ("han", "ㄏㄢ"),      ("hen", "ㄏㄣ"),      ("hua", "ㄏㄨㄚ"),
    ("huo", "ㄏㄨㄛ"),    ("cha", "ㄔㄚ"),      ("che", "ㄔㄜ"),
    ("chu", "ㄔㄨ"),      ("sha", "ㄕㄚ"),      ("she", "ㄕㄜ"),
    ("shu", "ㄕㄨ"),      ("rau", "ㄖㄠ"),      ("rou", "ㄖㄡ"),
    ("ran", "ㄖㄢ"),      ("ren", "ㄖㄣ"),      ("sai", "ㄙㄞ"),
    ("sei", "ㄙㄟ"),      ("sau", "ㄙㄠ"),      ("sou", "ㄙㄡ"),
    ("san", "ㄙㄢ"),      ("sen", "ㄙㄣ"),      ("ang", "ㄤ"),
    ("eng", "ㄥ"),        ("yai", "ㄧㄞ"),      ("yau", "ㄧㄠ"),
    ("yan", "ㄧㄢ"),      ("yin", "ㄧㄣ"),      ("wai", "ㄨㄞ"),
    ("wei", "ㄨㄟ"),      ("wan", "ㄨㄢ"),      ("wen", "ㄨㄣ"),
    ("yun", "ㄩㄣ"),      ("jiu", "ㄐㄩ"),      ("chi", "ㄑㄧ"),
    ("shi", "ㄒㄧ"),      ("tza", "ㄗㄚ"),      ("tze", "ㄗㄜ"),
    ("tzu", "ㄗㄨ"),      ("tsz", "ㄘ"),        ("tsa", "ㄘㄚ"),
    ("tse", "ㄘㄜ"),      ("tsu", "ㄘㄨ"),      ("duo", "ㄉㄨㄛ"),
    ("tuo", "ㄊㄨㄛ"),    ("nuo", "ㄋㄨㄛ"),    ("luo", "ㄌㄨㄛ"),
    ("ruo", "ㄖㄨㄛ"),    ("suo", "ㄙㄨㄛ"),    ("you", "ㄧㄡ"),
    ("niu", "ㄋㄩ"),      ("liu", "ㄌㄩ"),      ("gin", "ㄍㄧㄣ"),
    ("bo", "ㄅㄛ"),       ("po", "ㄆㄛ"),       ("mo", "ㄇㄛ"),
    ("fo", "ㄈㄛ"),       ("jr", "ㄓ"),         ("ja", "ㄓㄚ"),
    ("je", "ㄓㄜ"),       ("ju", "ㄓㄨ"),       ("ji", "ㄐㄧ"),
    ("tz", "ㄗ"),         ("sz", "ㄙ"),         ("er", "ㄦ"),
    ("ye", "ㄧㄝ"),       ("ba", "ㄅㄚ"),       ("bi", "ㄅㄧ"),
    ("bu", "ㄅㄨ"),       ("pa", "ㄆㄚ"),       ("pi", "ㄆㄧ"),
    ("pu", "ㄆㄨ"),       ("ma", "ㄇㄚ"),       ("me", "ㄇㄜ"),
    ("mi", "ㄇㄧ"),       ("mu", "ㄇㄨ"),       ("fa", "ㄈㄚ"),
    ("fu", "ㄈㄨ"),       ("da", "ㄉㄚ"),       ("de", "ㄉㄜ"),
    ("di", "ㄉㄧ"),       ("du", "ㄉㄨ"),       ("ta", "ㄊㄚ"),
    ("te", "ㄊㄜ"),       ("ti", "ㄊㄧ"),       ("tu", "ㄊㄨ"),
    ("na", "ㄋㄚ"),       ("ne", "ㄋㄜ"),       ("ni", "ㄋㄧ"),
    ("nu", "ㄋㄨ"),       ("la", "ㄌㄚ"),       ("lo", "ㄌㄛ"),
    ("le", "ㄌㄜ"),       ("li", "ㄌㄧ"),       ("lu", "ㄌㄨ"),
    ("ga", "ㄍㄚ"),       ("ge", "ㄍㄜ"),       ("gu", "ㄍㄨ"),
    ("ka", "ㄎㄚ"),       ("ke", "ㄎㄜ"),       ("ku", "ㄎㄨ"),
    ("ha", "ㄏㄚ"),       ("he", "ㄏㄜ"),       ("hu", "ㄏㄨ"),
    ("re", "ㄖㄜ"),       ("ru", "ㄖㄨ"),       ("sa", "ㄙㄚ"),
    ("se", "ㄙㄜ"),       ("su", "ㄙㄨ"),       ("eh", "ㄝ"),
    ("ai", "ㄞ"),         ("ei", "ㄟ"),         ("au", "ㄠ"),
    ("ou", "ㄡ"),         ("an", "ㄢ"),         ("en", "ㄣ"),
    ("ya", "ㄧㄚ"),       ("yo", "ㄧㄛ"),       ("wu", "ㄨ"),
    ("wa", "ㄨㄚ"),       ("wo", "ㄨㄛ"),       ("yu", "ㄩ"),
    ("ch", "ㄑ"),         ("yi", "ㄧ"),         ("r", "ㄖ"),
    ("a", "ㄚ"),          ("o", "ㄛ"),          ("e", "ㄜ"),
];

pub static YALE_PINYIN_SYLLABLES: &[(&str, &str)] = &[
    ("chwang", "ㄔㄨㄤ"), ("shwang", "ㄕㄨㄤ"), ("chyang", "ㄑㄧㄤ"),
    ("chyung", "ㄑㄩㄥ"), ("chywan", "ㄑㄩㄢ"), ("byang", "ㄅㄧㄤ"),
    ("dwang", "ㄉㄨㄤ"),  ("jwang", "ㄓㄨㄤ"),  ("syang", "ㄒㄧㄤ"),
    ("syung", "ㄒㄩㄥ"),  ("jyang", "ㄐㄧㄤ"),  ("jyung", "ㄐㄩㄥ"),
    ("nyang", "ㄋㄧㄤ"),  ("lyang", "ㄌㄧㄤ"),  ("gwang", "ㄍㄨㄤ"),
    ("kwang", "ㄎㄨㄤ"),  ("hwang", "ㄏㄨㄤ"),  ("chang", "ㄔㄤ"),
    ("cheng", "ㄔㄥ"),    ("chwai", "ㄔㄨㄞ"),  ("chwan", "ㄔㄨㄢ"),
    ("chung", "ㄔㄨㄥ"),  ("shang", "ㄕㄤ"),    ("sheng", "ㄕㄥ"),
    ("shwai", "ㄕㄨㄞ"),  ("shwan", "ㄕㄨㄢ"),  ("sywan", "ㄒㄩㄢ"),
    ("jywan", "ㄐㄩㄢ"),  ("chyau", "ㄑㄧㄠ"),  ("chyan", "ㄑㄧㄢ"),
    ("ching", "ㄑㄧㄥ"),  ("sying", "ㄒㄧㄥ"),  ("dzang", "ㄗㄤ"),
    ("dzeng", "ㄗㄥ"),    ("dzwan", "ㄗㄨㄢ"),  ("dzung", "ㄗㄨㄥ"),
    ("tsang", "ㄘㄤ"),    ("tseng", "ㄘㄥ"),    ("tswan", "ㄘㄨㄢ"),
    ("tsung", "ㄘㄨㄥ"),  ("chywe", "ㄑㄩㄝ"),  ("lywan", "ㄌㄩㄢ"),
    ("chwei", "ㄔㄨㄟ"),  ("chwun", "ㄔㄨㄣ"),  ("shwei", "ㄕㄨㄟ"),
    ("shwun", "ㄕㄨㄣ"),  ("chyou", "ㄑㄧㄡ"),  ("chyun", "ㄑㄩㄣ"),
    ("dzwei", "ㄗㄨㄟ"),  ("dzwun", "ㄗㄨㄣ"),  ("tswei", "ㄘㄨㄟ"),
    ("tswun", "ㄘㄨㄣ"),  ("kyang", "ㄎㄧㄤ"),  ("jang", "ㄓㄤ"),
    ("jeng", "ㄓㄥ"),     ("jwai", "ㄓㄨㄞ"),   ("jwan", "ㄓㄨㄢ"),
    ("jung", "ㄓㄨㄥ"),   ("syau", "ㄒㄧㄠ"),   ("syan", "ㄒㄧㄢ"),
    ("jyau", "ㄐㄧㄠ"),   ("jyan", "ㄐㄧㄢ"),   ("jing", "ㄐㄧㄥ"),
    ("sywe", "ㄒㄩㄝ"),   ("jywe", "ㄐㄩㄝ"),   ("chye", "ㄑㄧㄝ"),
    ("bang", "ㄅㄤ"),     ("beng", "ㄅㄥ"),     ("byau", "ㄅㄧㄠ"),
    ("byan", "ㄅㄧㄢ"),   ("bing", "ㄅㄧㄥ"),   ("pang", "ㄆㄤ"),
    ("peng", "ㄆㄥ"),     ("pyau", "ㄆㄧㄠ"),   ("pyan", "ㄆㄧㄢ"),
    ("ping", "ㄆㄧㄥ"),   ("mang", "ㄇㄤ"),     ("meng", "ㄇㄥ"),
    ("myau", "ㄇㄧㄠ"),   ("myan", "ㄇㄧㄢ"),   ("ming", "ㄇㄧㄥ"),
    ("fang", "ㄈㄤ"),     ("feng", "ㄈㄥ"),     ("fyau", "ㄈㄧㄠ"),
    ("dang", "ㄉㄤ"),     ("deng", "ㄉㄥ"),     ("dyau", "ㄉㄧㄠ"),
    ("dyan", "ㄉㄧㄢ"),   ("ding", "ㄉㄧㄥ"),   ("dwan", "ㄉㄨㄢ"),
    ("dung", "ㄉㄨㄥ"),   ("tang", "ㄊㄤ"),     ("teng", "ㄊㄥ"),
    ("tyau", "ㄊㄧㄠ"),   ("tyan", "ㄊㄧㄢ"),   ("ting", "ㄊㄧㄥ"),
    ("twan", "ㄊㄨㄢ"),   ("tung", "ㄊㄨㄥ"),   ("nang", "ㄋㄤ"),
    ("neng", "ㄋㄥ"),     ("nyau", "ㄋㄧㄠ"),   ("nyan", "ㄋㄧㄢ"),
    ("ning", "ㄋㄧㄥ"),   ("nwan", "ㄋㄨㄢ"),   ("nung", "ㄋㄨㄥ"),
    ("lang", "ㄌㄤ"),     ("leng", "ㄌㄥ"),     ("lyau", "ㄌㄧㄠ"),
    ("lyan", "ㄌㄧㄢ"),   ("ling", "ㄌㄧㄥ"),   ("lwan", "ㄌㄨㄢ"),
    ("lung", "ㄌㄨㄥ"),   ("gang", "ㄍㄤ"),     ("geng", "ㄍㄥ"),
    ("gwai", "ㄍㄨㄞ"),   ("gwan", "ㄍㄨㄢ"),   ("gung", "ㄍㄨㄥ"),
    ("kang", "ㄎㄤ"),     ("keng", "ㄎㄥ"),     ("kwai", "ㄎㄨㄞ"),
    ("kwan", "ㄎㄨㄢ"),   ("kung", "ㄎㄨㄥ"),   ("hang", "ㄏㄤ"),
    ("heng", "ㄏㄥ"),     ("hwai", "ㄏㄨㄞ"),   ("hwan", "ㄏㄨㄢ"),
    ("hung", "ㄏㄨㄥ"),   ("jwei", "ㄓㄨㄟ"),   ("jwun", "ㄓㄨㄣ"),
    ("chai", "ㄔㄞ"),     ("chau", "ㄔㄠ"),     ("chou", "ㄔㄡ"),
    ("chan", "ㄔㄢ"),     ("chen", "ㄔㄣ"),     ("chwa", "ㄔㄨㄚ"),
    ("shai", "ㄕㄞ"),     ("shei", "ㄕㄟ"),     ("shau", "ㄕㄠ"),
    ("shou", "ㄕㄡ"),     ("shan", "ㄕㄢ"),     ("shen", "ㄕㄣ"),
    ("shwa", "ㄕㄨㄚ"),   ("shwo", "ㄕㄨㄛ"),   ("rang", "ㄖㄤ"),
    ("reng", "ㄖㄥ"),     ("rwan", "ㄖㄨㄢ"),   ("rung", "ㄖㄨㄥ"),
    ("sang", "ㄙㄤ"),     ("seng", "ㄙㄥ"),     ("swan", "ㄙㄨㄢ"),
    ("sung", "ㄙㄨㄥ"),   ("yang", "ㄧㄤ"),     ("ying", "ㄧㄥ"),
    ("wang", "ㄨㄤ"),     ("weng", "ㄨㄥ"),     ("ywan", "ㄩㄢ"),
    ("yung", "ㄩㄥ"),     ("syou", "ㄒㄧㄡ"),   ("syun", "ㄒㄩㄣ"),
    ("nywe", "ㄋㄩㄝ"),   ("lywe", "ㄌㄩㄝ"),   ("gwei", "ㄍㄨㄟ"),
    ("kwei", "ㄎㄨㄟ"),   ("jyou", "ㄐㄧㄡ"),   ("jyun", "ㄐㄩㄣ"),
    ("chya", "ㄑㄧㄚ"),   ("chin", "ㄑㄧㄣ"),   ("syin", "ㄒㄧㄣ"),
    ("dzai", "ㄗㄞ"),     ("dzei", "ㄗㄟ"),     ("dzau", "ㄗㄠ"),
    ("dzou", "ㄗㄡ"),     ("dzan", "ㄗㄢ"),     ("dzen", "ㄗㄣ"),
    ("tsai", "ㄘㄞ"),     ("tsau", "ㄘㄠ"),     ("tsou", "ㄘㄡ"),
    ("tsan", "ㄘㄢ"),     ("tsen", "ㄘㄣ"),     ("chwo", "ㄔㄨㄛ"),
    ("myou", "ㄇㄧㄡ"),   ("dyou", "ㄉㄧㄡ"),   ("dwei", "ㄉㄨㄟ"),
    ("dwun", "ㄉㄨㄣ"),   ("twei", "ㄊㄨㄟ"),   ("twun", "ㄊㄨㄣ"),
    ("nyou", "ㄋㄧㄡ"),   ("nwei", "ㄋㄨㄟ"),   ("nwun", "ㄋㄨㄣ"),
    ("lyou", "ㄌㄧㄡ"),   ("lwun", "ㄌㄨㄣ"),   ("gwun", "ㄍㄨㄣ"),
    ("kwun", "ㄎㄨㄣ"),   ("hwei", "ㄏㄨㄟ"),   ("hwun", "ㄏㄨㄣ"),
    ("rwei", "ㄖㄨㄟ"),   ("rwun", "ㄖㄨㄣ"),   ("dzwo", "ㄗㄨㄛ"),
    ("tswo", "ㄘㄨㄛ"),   ("swei", "ㄙㄨㄟ"),   ("swun", "ㄙㄨㄣ"),
    ("chyu", "ㄑㄩ"),     ("giau", "ㄍㄧㄠ"),   ("sye", "ㄒㄧㄝ"),
    ("jye", "ㄐㄧㄝ"),    ("jai", "ㄓㄞ"),      ("jei", "ㄓㄟ"),
    ("jau", "ㄓㄠ"),      ("jou", "ㄓㄡ"),      ("jan", "ㄓㄢ"),
    ("jen", "ㄓㄣ"),      ("jwa", "ㄓㄨㄚ"),    ("sya", "ㄒㄧㄚ"),
    ("bye", "ㄅㄧㄝ"),    ("pye", "ㄆㄧㄝ"),    ("mye", "ㄇㄧㄝ"),
    ("dye", "ㄉㄧㄝ"),    ("tye", "ㄊㄧㄝ"),    ("nye", "ㄋㄧㄝ"),
    ("lye", "ㄌㄧㄝ"),    ("jya", "ㄐㄧㄚ"),    ("jin", "ㄐㄧㄣ"),
    ("chr", "ㄔ"),        ("shr", "ㄕ"),        ("ywe", "ㄩㄝ"),
    ("jwo", "ㄓㄨㄛ"),    ("bai", "ㄅㄞ"),      ("bei", "ㄅㄟ"),
    ("bau", "ㄅㄠ"),      ("ban", "ㄅㄢ"),      ("ben", "ㄅㄣ"),
    ("bin", "ㄅㄧㄣ"),    ("pai", "ㄆㄞ"),      ("pei", "ㄆㄟ"),
    ("pau", "ㄆㄠ"),      ("pou", "ㄆㄡ"),      ("pan", "ㄆㄢ"),
    ("pen", "ㄆㄣ"),      ("pya", "ㄆㄧㄚ"),    ("pin", "ㄆㄧㄣ"),
    ("mai", "ㄇㄞ"),      ("mei", "ㄇㄟ"),      ("mau", "ㄇㄠ"),
    ("mou", "ㄇㄡ"),      ("man", "ㄇㄢ"),      ("men", "ㄇㄣ"),
    ("min", "ㄇㄧㄣ"),    ("fei", "ㄈㄟ"),      ("fou", "ㄈㄡ"),
    ("fan", "ㄈㄢ"),      ("fen", "ㄈㄣ"),      ("dai", "ㄉㄞ"),
    ("dei", "ㄉㄟ"),      ("dau", "ㄉㄠ"),      ("dou", "ㄉㄡ"),
    ("dan", "ㄉㄢ"),      ("den", "ㄉㄣ"),      ("dya", "ㄉㄧㄚ"),
    ("tai", "ㄊㄞ"),      ("tau", "ㄊㄠ"),      ("tou", "ㄊㄡ"),
    ("tan", "ㄊㄢ"),      ("nai", "ㄋㄞ"),      ("nei", "ㄋㄟ"),
    ("nau", "ㄋㄠ"),      ("nou", "ㄋㄡ"),      ("nan", "ㄋㄢ"),
    ("nen", "ㄋㄣ"),      ("nin", "ㄋㄧㄣ"),    ("lai", "ㄌㄞ"),
    ("lei", "ㄌㄟ"),      ("lau", "ㄌㄠ"),      ("lou", "ㄌㄡ"),
    ("lan", "ㄌㄢ"),      ("lya", "ㄌㄧㄚ"),    ("lin", "ㄌㄧㄣ"),
    ("gai", "ㄍㄞ"),      ("gei", "ㄍㄟ"),      ("gau", "ㄍㄠ"),
    ("gou", "ㄍㄡ"),      ("gan", "ㄍㄢ"),      ("gen", "ㄍㄣ"),
    ("gwa", "ㄍㄨㄚ"),    ("gwo", "ㄍㄨㄛ"),    ("gue", "ㄍㄨㄜ"),
    ("kai", "ㄎㄞ"),      ("kau", "ㄎㄠ"),      ("kou", "ㄎㄡ"),
    ("kan", "ㄎㄢ"),      ("ken", "ㄎㄣ"),      ("kwa", "ㄎㄨㄚ"),
    ("kwo", "ㄎㄨㄛ"),    ("hai", "ㄏㄞ"),      ("hei", "ㄏㄟ"),
    ("hau", "ㄏㄠ"),      ("hou", "ㄏㄡ"),      ("han", "ㄏㄢ"),
    ("hen", "ㄏㄣ"),      ("hwa", "ㄏㄨㄚ"),    ("hwo", "ㄏㄨㄛ"),
    ("cha", "ㄔㄚ"),      ("che", "ㄔㄜ"),      ("chu", "ㄔㄨ"),
    ("sha", "ㄕㄚ"),      ("she", "ㄕㄜ"),      ("shu", "ㄕㄨ"),
    ("rau", "ㄖㄠ"),      ("rou", "ㄖㄡ"),      ("ran", "ㄖㄢ"),
    ("ren", "ㄖㄣ"),      ("sai", "ㄙㄞ"),      ("sei", "ㄙㄟ"),
    ("sau", "ㄙㄠ"),      ("sou", "ㄙㄡ"),      ("san", "ㄙㄢ"),
    ("sen", "ㄙㄣ"),      ("ang", "ㄤ"),        ("eng", "ㄥ"),
    ("yai", "ㄧㄞ"),      ("yau", "ㄧㄠ"),      ("yan", "ㄧㄢ"),
    ("yin", "ㄧㄣ"),      ("wai", "ㄨㄞ"),      ("wei", "ㄨㄟ"),
    ("wan", "ㄨㄢ"),      ("wen", "ㄨㄣ"),      ("yun", "ㄩㄣ"),
    ("syu", "ㄒㄩ"),      ("jyu", "ㄐㄩ"),      ("chi", "ㄑㄧ"),
    ("syi", "ㄒㄧ"),      ("dza", "ㄗㄚ"),      ("dze", "ㄗㄜ"),
    ("dzu", "ㄗㄨ"),      ("tsz", "ㄘ"),        ("tsa", "ㄘㄚ"),
    ("tse", "ㄘㄜ"),      ("tsu", "ㄘㄨ"),      ("dwo", "ㄉㄨㄛ"),
    ("two", "ㄊㄨㄛ"),    ("nwo", "ㄋㄨㄛ"),    ("lwo", "ㄌㄨㄛ"),
    ("rwo", "ㄖㄨㄛ"),    ("swo", "ㄙㄨㄛ"),    ("you", "ㄧㄡ"),
    ("nyu", "ㄋㄩ"),      ("lyu", "ㄌㄩ"),      ("bwo", "ㄅㄛ"),
    ("pwo", "ㄆㄛ"),      ("mwo", "ㄇㄛ"),      ("fwo", "ㄈㄛ"),
    ("gin", "ㄍㄧㄣ"),    ("jr", "ㄓ"),         ("ja", "ㄓㄚ"),
    ("je", "ㄓㄜ"),       ("ju", "ㄓㄨ"),       ("ji", "ㄐㄧ"),
    ("dz", "ㄗ"),         ("sz", "ㄙ"),         ("er", "ㄦ"),
    ("ye", "ㄧㄝ"),       ("ba", "ㄅㄚ"),       ("bi", "ㄅㄧ"),
    ("bu", "ㄅㄨ"),       ("pa", "ㄆㄚ"),       ("pi", "ㄆㄧ"),
    ("pu", "ㄆㄨ"),       ("ma", "ㄇㄚ"),       ("me", "ㄇㄜ"),
    ("mi", "ㄇㄧ"),       ("mu", "ㄇㄨ"),       ("fa", "ㄈㄚ"),
    ("fu", "ㄈㄨ"),       ("da", "ㄉㄚ"),       ("de", "ㄉㄜ"),
    ("di", "ㄉㄧ"),       ("du", "ㄉㄨ"),       ("ta", "ㄊㄚ"),
    ("te", "ㄊㄜ"),       ("ti", "ㄊㄧ"),       ("tu", "ㄊㄨ"),
    ("na", "ㄋㄚ"),       ("ne", "ㄋㄜ"),       ("ni", "ㄋㄧ"),
    ("nu", "ㄋㄨ"),       ("la", "ㄌㄚ"),       ("lo", "ㄌㄛ"),
    ("le", "ㄌㄜ"),       ("li", "ㄌㄧ"),       ("lu", "ㄌㄨ"),
    ("ga", "ㄍㄚ"),       ("ge", "ㄍㄜ"),       ("gu", "ㄍㄨ"),
    ("ka", "ㄎㄚ"),       ("ke", "ㄎㄜ"),       ("ku", "ㄎㄨ"),
    ("ha", "ㄏㄚ"),       ("he", "ㄏㄜ"),       ("hu", "ㄏㄨ"),
    ("re", "ㄖㄜ"),       ("ru", "ㄖㄨ"),       ("sa", "ㄙㄚ"),
    ("se", "ㄙㄜ"),       ("su", "ㄙㄨ"),       ("eh", "ㄝ"),
    ("ai", "ㄞ"),         ("ei", "ㄟ"),         ("au", "ㄠ"),
    ("ou", "ㄡ"),         ("an", "ㄢ"),         ("en", "ㄣ"),
    ("ya", "ㄧㄚ"),       ("yo", "ㄧㄛ"),       ("wu", "ㄨ"),
    ("wa", "ㄨㄚ"),       ("wo", "ㄨㄛ"),       ("yu", "ㄩ"),
    ("ch", "ㄑ"),         ("yi", "ㄧ"),         ("r", "ㄖ"),
    ("a", "ㄚ"),          ("o", "ㄛ"),          ("e", "ㄜ"),
];

pub static HUALUO_PINYIN_SYLLABLES: &[(&str, &str)] = &[
    ("shuang", "ㄕㄨㄤ"), ("jhuang", "ㄓㄨㄤ"), ("chyueh", "ㄑㄩㄝ"),
    ("chyuan", "ㄑㄩㄢ"), ("chyong", "ㄑㄩㄥ"), ("chiang", "ㄑㄧㄤ"),
    ("chuang", "ㄔㄨㄤ"), ("biang", "ㄅㄧㄤ"),  ("duang", "ㄉㄨㄤ"),
    ("kyang", "ㄎㄧㄤ"),  ("syueh", "ㄒㄩㄝ"),  ("syuan", "ㄒㄩㄢ"),
    ("syong", "ㄒㄩㄥ"),  ("sihei", "ㄙㄟ"),    ("siang", "ㄒㄧㄤ"),
    ("shuei", "ㄕㄨㄟ"),  ("shuan", "ㄕㄨㄢ"),  ("shuai", "ㄕㄨㄞ"),
    ("sheng", "ㄕㄥ"),    ("shang", "ㄕㄤ"),    ("nyueh", "ㄋㄩㄝ"),
    ("niang", "ㄋㄧㄤ"),  ("lyueh", "ㄌㄩㄝ"),  ("lyuan", "ㄌㄩㄢ"),
    ("liang", "ㄌㄧㄤ"),  ("kuang", "ㄎㄨㄤ"),  ("jyueh", "ㄐㄩㄝ"),
    ("jyuan", "ㄐㄩㄢ"),  ("jyong", "ㄐㄩㄥ"),  ("jiang", "ㄐㄧㄤ"),
    ("jhuei", "ㄓㄨㄟ"),  ("jhuan", "ㄓㄨㄢ"),  ("jhuai", "ㄓㄨㄞ"),
    ("jhong", "ㄓㄨㄥ"),  ("jheng", "ㄓㄥ"),    ("jhang", "ㄓㄤ"),
    ("huang", "ㄏㄨㄤ"),  ("guang", "ㄍㄨㄤ"),  ("chyun", "ㄑㄩㄣ"),
    ("tsuei", "ㄘㄨㄟ"),  ("tsuan", "ㄘㄨㄢ"),  ("tsong", "ㄘㄨㄥ"),
    ("chiou", "ㄑㄧㄡ"),  ("ching", "ㄑㄧㄥ"),  ("chieh", "ㄑㄧㄝ"),
    ("chiao", "ㄑㄧㄠ"),  ("chian", "ㄑㄧㄢ"),  ("chuei", "ㄔㄨㄟ"),
    ("chuan", "ㄔㄨㄢ"),  ("chuai", "ㄔㄨㄞ"),  ("chong", "ㄔㄨㄥ"),
    ("cheng", "ㄔㄥ"),    ("chang", "ㄔㄤ"),    ("tseng", "ㄘㄥ"),
    ("tsang", "ㄘㄤ"),    ("gyao", "ㄍㄧㄠ"),   ("fiao", "ㄈㄧㄠ"),
    ("zuei", "ㄗㄨㄟ"),   ("zuan", "ㄗㄨㄢ"),   ("zong", "ㄗㄨㄥ"),
    ("zeng", "ㄗㄥ"),     ("zang", "ㄗㄤ"),     ("yueh", "ㄩㄝ"),
    ("yuan", "ㄩㄢ"),     ("yong", "ㄩㄥ"),     ("ying", "ㄧㄥ"),
    ("yang", "ㄧㄤ"),     ("wong", "ㄨㄥ"),     ("wang", "ㄨㄤ"),
    ("tuei", "ㄊㄨㄟ"),   ("tuan", "ㄊㄨㄢ"),   ("tong", "ㄊㄨㄥ"),
    ("ting", "ㄊㄧㄥ"),   ("tieh", "ㄊㄧㄝ"),   ("tiao", "ㄊㄧㄠ"),
    ("tian", "ㄊㄧㄢ"),   ("teng", "ㄊㄥ"),     ("tang", "ㄊㄤ"),
    ("syun", "ㄒㄩㄣ"),   ("suei", "ㄙㄨㄟ"),   ("suan", "ㄙㄨㄢ"),
    ("song", "ㄙㄨㄥ"),   ("siou", "ㄒㄧㄡ"),   ("sing", "ㄒㄧㄥ"),
    ("sieh", "ㄒㄧㄝ"),   ("siao", "ㄒㄧㄠ"),   ("sian", "ㄒㄧㄢ"),
    ("shuo", "ㄕㄨㄛ"),   ("shun", "ㄕㄨㄣ"),   ("shua", "ㄕㄨㄚ"),
    ("shou", "ㄕㄡ"),     ("shih", "ㄕ"),       ("shen", "ㄕㄣ"),
    ("shei", "ㄕㄟ"),     ("shao", "ㄕㄠ"),     ("shan", "ㄕㄢ"),
    ("shai", "ㄕㄞ"),     ("seng", "ㄙㄥ"),     ("sang", "ㄙㄤ"),
    ("ruei", "ㄖㄨㄟ"),   ("ruan", "ㄖㄨㄢ"),   ("rong", "ㄖㄨㄥ"),
    ("reng", "ㄖㄥ"),     ("rang", "ㄖㄤ"),     ("ping", "ㄆㄧㄥ"),
    ("pieh", "ㄆㄧㄝ"),   ("piao", "ㄆㄧㄠ"),   ("pian", "ㄆㄧㄢ"),
    ("peng", "ㄆㄥ"),     ("pang", "ㄆㄤ"),     ("nuei", "ㄋㄨㄟ"),
    ("nuan", "ㄋㄨㄢ"),   ("nong", "ㄋㄨㄥ"),   ("niou", "ㄋㄧㄡ"),
    ("ning", "ㄋㄧㄥ"),   ("nieh", "ㄋㄧㄝ"),   ("niao", "ㄋㄧㄠ"),
    ("nian", "ㄋㄧㄢ"),   ("neng", "ㄋㄥ"),     ("nang", "ㄋㄤ"),
    ("miou", "ㄇㄧㄡ"),   ("ming", "ㄇㄧㄥ"),   ("mieh", "ㄇㄧㄝ"),
    ("miao", "ㄇㄧㄠ"),   ("mian", "ㄇㄧㄢ"),   ("meng", "ㄇㄥ"),
    ("mang", "ㄇㄤ"),     ("luan", "ㄌㄨㄢ"),   ("long", "ㄌㄨㄥ"),
    ("liou", "ㄌㄧㄡ"),   ("ling", "ㄌㄧㄥ"),   ("lieh", "ㄌㄧㄝ"),
    ("liao", "ㄌㄧㄠ"),   ("lian", "ㄌㄧㄢ"),   ("leng", "ㄌㄥ"),
    ("lang", "ㄌㄤ"),     ("kuei", "ㄎㄨㄟ"),   ("kuan", "ㄎㄨㄢ"),
    ("kuai", "ㄎㄨㄞ"),   ("kong", "ㄎㄨㄥ"),   ("keng", "ㄎㄥ"),
    ("kang", "ㄎㄤ"),     ("jyun", "ㄐㄩㄣ"),   ("jiou", "ㄐㄧㄡ"),
    ("jing", "ㄐㄧㄥ"),   ("jieh", "ㄐㄧㄝ"),   ("jiao", "ㄐㄧㄠ"),
    ("jian", "ㄐㄧㄢ"),   ("jhuo", "ㄓㄨㄛ"),   ("jhun", "ㄓㄨㄣ"),
    ("jhua", "ㄓㄨㄚ"),   ("jhou", "ㄓㄡ"),     ("jhih", "ㄓ"),
    ("jhen", "ㄓㄣ"),     ("jhei", "ㄓㄟ"),     ("jhao", "ㄓㄠ"),
    ("jhan", "ㄓㄢ"),     ("jhai", "ㄓㄞ"),     ("huei", "ㄏㄨㄟ"),
    ("huan", "ㄏㄨㄢ"),   ("huai", "ㄏㄨㄞ"),   ("hong", "ㄏㄨㄥ"),
    ("heng", "ㄏㄥ"),     ("hang", "ㄏㄤ"),     ("guei", "ㄍㄨㄟ"),
    ("guan", "ㄍㄨㄢ"),   ("guai", "ㄍㄨㄞ"),   ("gong", "ㄍㄨㄥ"),
    ("geng", "ㄍㄥ"),     ("gang", "ㄍㄤ"),     ("feng", "ㄈㄥ"),
    ("fang", "ㄈㄤ"),     ("duei", "ㄉㄨㄟ"),   ("duan", "ㄉㄨㄢ"),
    ("dong", "ㄉㄨㄥ"),   ("diou", "ㄉㄧㄡ"),   ("ding", "ㄉㄧㄥ"),
    ("dieh", "ㄉㄧㄝ"),   ("diao", "ㄉㄧㄠ"),   ("dian", "ㄉㄧㄢ"),
    ("deng", "ㄉㄥ"),     ("dang", "ㄉㄤ"),     ("chyu", "ㄑㄩ"),
    ("tsuo", "ㄘㄨㄛ"),   ("tsun", "ㄘㄨㄣ"),   ("tsou", "ㄘㄡ"),
    ("chin", "ㄑㄧㄣ"),   ("tsih", "ㄘ"),       ("chia", "ㄑㄧㄚ"),
    ("chuo", "ㄔㄨㄛ"),   ("chun", "ㄔㄨㄣ"),   ("chua", "ㄔㄨㄚ"),
    ("chou", "ㄔㄡ"),     ("chih", "ㄔ"),       ("chen", "ㄔㄣ"),
    ("chao", "ㄔㄠ"),     ("chan", "ㄔㄢ"),     ("chai", "ㄔㄞ"),
    ("tsen", "ㄘㄣ"),     ("tsao", "ㄘㄠ"),     ("tsan", "ㄘㄢ"),
    ("tsai", "ㄘㄞ"),     ("bing", "ㄅㄧㄥ"),   ("bieh", "ㄅㄧㄝ"),
    ("biao", "ㄅㄧㄠ"),   ("bian", "ㄅㄧㄢ"),   ("beng", "ㄅㄥ"),
    ("bang", "ㄅㄤ"),     ("gin", "ㄍㄧㄣ"),    ("den", "ㄉㄣ"),
    ("zuo", "ㄗㄨㄛ"),    ("zun", "ㄗㄨㄣ"),    ("zou", "ㄗㄡ"),
    ("zih", "ㄗ"),        ("zen", "ㄗㄣ"),      ("zei", "ㄗㄟ"),
    ("zao", "ㄗㄠ"),      ("zan", "ㄗㄢ"),      ("zai", "ㄗㄞ"),
    ("yun", "ㄩㄣ"),      ("you", "ㄧㄡ"),      ("yin", "ㄧㄣ"),
    ("yeh", "ㄧㄝ"),      ("yao", "ㄧㄠ"),      ("yan", "ㄧㄢ"),
    ("yai", "ㄧㄞ"),      ("wun", "ㄨㄣ"),      ("wei", "ㄨㄟ"),
    ("wan", "ㄨㄢ"),      ("wai", "ㄨㄞ"),      ("tuo", "ㄊㄨㄛ"),
    ("tun", "ㄊㄨㄣ"),    ("tou", "ㄊㄡ"),      ("tao", "ㄊㄠ"),
    ("tan", "ㄊㄢ"),      ("tai", "ㄊㄞ"),      ("syu", "ㄒㄩ"),
    ("suo", "ㄙㄨㄛ"),    ("sun", "ㄙㄨㄣ"),    ("sou", "ㄙㄡ"),
    ("sin", "ㄒㄧㄣ"),    ("sih", "ㄙ"),        ("sia", "ㄒㄧㄚ"),
    ("shu", "ㄕㄨ"),      ("she", "ㄕㄜ"),      ("sha", "ㄕㄚ"),
    ("sen", "ㄙㄣ"),      ("sao", "ㄙㄠ"),      ("san", "ㄙㄢ"),
    ("sai", "ㄙㄞ"),      ("ruo", "ㄖㄨㄛ"),    ("run", "ㄖㄨㄣ"),
    ("rou", "ㄖㄡ"),      ("rih", "ㄖ"),        ("ren", "ㄖㄣ"),
    ("rao", "ㄖㄠ"),      ("ran", "ㄖㄢ"),      ("pou", "ㄆㄡ"),
    ("pin", "ㄆㄧㄣ"),    ("pia", "ㄆㄧㄚ"),    ("pen", "ㄆㄣ"),
    ("pei", "ㄆㄟ"),      ("pao", "ㄆㄠ"),      ("pan", "ㄆㄢ"),
    ("pai", "ㄆㄞ"),      ("nyu", "ㄋㄩ"),      ("nuo", "ㄋㄨㄛ"),
    ("nun", "ㄋㄨㄣ"),    ("nou", "ㄋㄡ"),      ("nin", "ㄋㄧㄣ"),
    ("nen", "ㄋㄣ"),      ("nei", "ㄋㄟ"),      ("nao", "ㄋㄠ"),
    ("nan", "ㄋㄢ"),      ("nai", "ㄋㄞ"),      ("mou", "ㄇㄡ"),
    ("min", "ㄇㄧㄣ"),    ("men", "ㄇㄣ"),      ("mei", "ㄇㄟ"),
    ("mao", "ㄇㄠ"),      ("man", "ㄇㄢ"),      ("mai", "ㄇㄞ"),
    ("lyu", "ㄌㄩ"),      ("luo", "ㄌㄨㄛ"),    ("lun", "ㄌㄨㄣ"),
    ("lou", "ㄌㄡ"),      ("lin", "ㄌㄧㄣ"),    ("lia", "ㄌㄧㄚ"),
    ("lei", "ㄌㄟ"),      ("lao", "ㄌㄠ"),      ("lan", "ㄌㄢ"),
    ("lai", "ㄌㄞ"),      ("kuo", "ㄎㄨㄛ"),    ("kun", "ㄎㄨㄣ"),
    ("kua", "ㄎㄨㄚ"),    ("kou", "ㄎㄡ"),      ("ken", "ㄎㄣ"),
    ("kao", "ㄎㄠ"),      ("kan", "ㄎㄢ"),      ("kai", "ㄎㄞ"),
    ("jyu", "ㄐㄩ"),      ("jin", "ㄐㄧㄣ"),    ("jia", "ㄐㄧㄚ"),
    ("jhu", "ㄓㄨ"),      ("jhe", "ㄓㄜ"),      ("jha", "ㄓㄚ"),
    ("huo", "ㄏㄨㄛ"),    ("hun", "ㄏㄨㄣ"),    ("hua", "ㄏㄨㄚ"),
    ("hou", "ㄏㄡ"),      ("hen", "ㄏㄣ"),      ("hei", "ㄏㄟ"),
    ("hao", "ㄏㄠ"),      ("han", "ㄏㄢ"),      ("hai", "ㄏㄞ"),
    ("guo", "ㄍㄨㄛ"),    ("gun", "ㄍㄨㄣ"),    ("gue", "ㄍㄨㄜ"),
    ("gua", "ㄍㄨㄚ"),    ("gou", "ㄍㄡ"),      ("gen", "ㄍㄣ"),
    ("gei", "ㄍㄟ"),      ("gao", "ㄍㄠ"),      ("gan", "ㄍㄢ"),
    ("gai", "ㄍㄞ"),      ("fou", "ㄈㄡ"),      ("fen", "ㄈㄣ"),
    ("fei", "ㄈㄟ"),      ("fan", "ㄈㄢ"),      ("eng", "ㄥ"),
    ("duo", "ㄉㄨㄛ"),    ("dun", "ㄉㄨㄣ"),    ("dou", "ㄉㄡ"),
    ("dia", "ㄉㄧㄚ"),    ("dei", "ㄉㄟ"),      ("dao", "ㄉㄠ"),
    ("dan", "ㄉㄢ"),      ("dai", "ㄉㄞ"),      ("tsu", "ㄘㄨ"),
    ("chi", "ㄑㄧ"),      ("chu", "ㄔㄨ"),      ("che", "ㄔㄜ"),
    ("cha", "ㄔㄚ"),      ("tse", "ㄘㄜ"),      ("tsa", "ㄘㄚ"),
    ("bin", "ㄅㄧㄣ"),    ("ben", "ㄅㄣ"),      ("bei", "ㄅㄟ"),
    ("bao", "ㄅㄠ"),      ("ban", "ㄅㄢ"),      ("bai", "ㄅㄞ"),
    ("ang", "ㄤ"),        ("ch", "ㄑ"),         ("zu", "ㄗㄨ"),
    ("ze", "ㄗㄜ"),       ("za", "ㄗㄚ"),       ("yu", "ㄩ"),
    ("yo", "ㄧㄛ"),       ("ya", "ㄧㄚ"),       ("yi", "ㄧ"),
    ("wu", "ㄨ"),         ("wo", "ㄨㄛ"),       ("wa", "ㄨㄚ"),
    ("tu", "ㄊㄨ"),       ("ti", "ㄊㄧ"),       ("te", "ㄊㄜ"),
    ("ta", "ㄊㄚ"),       ("su", "ㄙㄨ"),       ("si", "ㄒㄧ"),
    ("se", "ㄙㄜ"),       ("sa", "ㄙㄚ"),       ("ru", "ㄖㄨ"),
    ("re", "ㄖㄜ"),       ("pu", "ㄆㄨ"),       ("po", "ㄆㄛ"),
    ("pi", "ㄆㄧ"),       ("pa", "ㄆㄚ"),       ("ou", "ㄡ"),
    ("nu", "ㄋㄨ"),       ("ni", "ㄋㄧ"),       ("ne", "ㄋㄜ"),
    ("na", "ㄋㄚ"),       ("mu", "ㄇㄨ"),       ("mo", "ㄇㄛ"),
    ("mi", "ㄇㄧ"),       ("me", "ㄇㄜ"),       ("ma", "ㄇㄚ"),
    ("lu", "ㄌㄨ"),       ("lo", "ㄌㄛ"),       ("li", "ㄌㄧ"),
    ("le", "ㄌㄜ"),       ("la", "ㄌㄚ"),       ("ku", "ㄎㄨ"),
    ("ke", "ㄎㄜ"),       ("ka", "ㄎㄚ"),       ("ji", "ㄐㄧ"),
    ("hu", "ㄏㄨ"),       ("he", "ㄏㄜ"),       ("ha", "ㄏㄚ"),
    ("gu", "ㄍㄨ"),       ("ge", "ㄍㄜ"),       ("ga", "ㄍㄚ"),
    ("fu", "ㄈㄨ"),       ("fo", "ㄈㄛ"),       ("fa", "ㄈㄚ"),
    ("er", "ㄦ"),         ("en", "ㄣ"),         ("ei", "ㄟ"),
    ("eh", "ㄝ"),         ("du", "ㄉㄨ"),       ("di", "ㄉㄧ"),
    ("de", "ㄉㄜ"),       ("da", "ㄉㄚ"),       ("bu", "ㄅㄨ"),
    ("bo", "ㄅㄛ"),       ("bi", "ㄅㄧ"),       ("ba", "ㄅㄚ"),
    ("ao", "ㄠ"),         ("an", "ㄢ"),         ("ai", "ㄞ"),
    ("o", "ㄛ"),          ("e", "ㄜ"),          ("a", "ㄚ"),
];

pub static UNIVERSAL_PINYIN_SYLLABLES: &[(&str, &str)] = &[
    ("shuang", "ㄕㄨㄤ"), ("jhuang", "ㄓㄨㄤ"), ("chuang", "ㄔㄨㄤ"),
    ("biang", "ㄅㄧㄤ"),  ("duang", "ㄉㄨㄤ"),  ("cyuan", "ㄑㄩㄢ"),
    ("cyong", "ㄑㄩㄥ"),  ("ciang", "ㄑㄧㄤ"),  ("kyang", "ㄎㄧㄤ"),
    ("syuan", "ㄒㄩㄢ"),  ("syong", "ㄒㄩㄥ"),  ("sihei", "ㄙㄟ"),
    ("siang", "ㄒㄧㄤ"),  ("shuei", "ㄕㄨㄟ"),  ("shuan", "ㄕㄨㄢ"),
    ("shuai", "ㄕㄨㄞ"),  ("sheng", "ㄕㄥ"),    ("shang", "ㄕㄤ"),
    ("niang", "ㄋㄧㄤ"),  ("lyuan", "ㄌㄩㄢ"),  ("liang", "ㄌㄧㄤ"),
    ("kuang", "ㄎㄨㄤ"),  ("jyuan", "ㄐㄩㄢ"),  ("jyong", "ㄐㄩㄥ"),
    ("jiang", "ㄐㄧㄤ"),  ("jhuei", "ㄓㄨㄟ"),  ("jhuan", "ㄓㄨㄢ"),
    ("jhuai", "ㄓㄨㄞ"),  ("jhong", "ㄓㄨㄥ"),  ("jheng", "ㄓㄥ"),
    ("jhang", "ㄓㄤ"),    ("huang", "ㄏㄨㄤ"),  ("guang", "ㄍㄨㄤ"),
    ("chuei", "ㄔㄨㄟ"),  ("chuan", "ㄔㄨㄢ"),  ("chuai", "ㄔㄨㄞ"),
    ("chong", "ㄔㄨㄥ"),  ("cheng", "ㄔㄥ"),    ("chang", "ㄔㄤ"),
    ("cyue", "ㄑㄩㄝ"),   ("syue", "ㄒㄩㄝ"),   ("nyue", "ㄋㄩㄝ"),
    ("lyue", "ㄌㄩㄝ"),   ("jyue", "ㄐㄩㄝ"),   ("cyun", "ㄑㄩㄣ"),
    ("cuei", "ㄘㄨㄟ"),   ("cuan", "ㄘㄨㄢ"),   ("cong", "ㄘㄨㄥ"),
    ("ciou", "ㄑㄧㄡ"),   ("cing", "ㄑㄧㄥ"),   ("ciao", "ㄑㄧㄠ"),
    ("cian", "ㄑㄧㄢ"),   ("ceng", "ㄘㄥ"),     ("cang", "ㄘㄤ"),
    ("gyao", "ㄍㄧㄠ"),   ("fiao", "ㄈㄧㄠ"),   ("zuei", "ㄗㄨㄟ"),
    ("zuan", "ㄗㄨㄢ"),   ("zong", "ㄗㄨㄥ"),   ("zeng", "ㄗㄥ"),
    ("zang", "ㄗㄤ"),     ("yuan", "ㄩㄢ"),     ("yong", "ㄩㄥ"),
    ("ying", "ㄧㄥ"),     ("yang", "ㄧㄤ"),     ("wong", "ㄨㄥ"),
    ("wang", "ㄨㄤ"),     ("tuei", "ㄊㄨㄟ"),   ("tuan", "ㄊㄨㄢ"),
    ("tong", "ㄊㄨㄥ"),   ("ting", "ㄊㄧㄥ"),   ("tiao", "ㄊㄧㄠ"),
    ("tian", "ㄊㄧㄢ"),   ("teng", "ㄊㄥ"),     ("tang", "ㄊㄤ"),
    ("syun", "ㄒㄩㄣ"),   ("suei", "ㄙㄨㄟ"),   ("suan", "ㄙㄨㄢ"),
    ("song", "ㄙㄨㄥ"),   ("siou", "ㄒㄧㄡ"),   ("sing", "ㄒㄧㄥ"),
    ("siao", "ㄒㄧㄠ"),   ("sian", "ㄒㄧㄢ"),   ("shuo", "ㄕㄨㄛ"),
    ("shun", "ㄕㄨㄣ"),   ("shua", "ㄕㄨㄚ"),   ("shou", "ㄕㄡ"),
    ("shih", "ㄕ"),       ("shen", "ㄕㄣ"),     ("shei", "ㄕㄟ"),
    ("shao", "ㄕㄠ"),     ("shan", "ㄕㄢ"),     ("shai", "ㄕㄞ"),
    ("seng", "ㄙㄥ"),     ("sang", "ㄙㄤ"),     ("ruei", "ㄖㄨㄟ"),
    ("ruan", "ㄖㄨㄢ"),   ("rong", "ㄖㄨㄥ"),   ("reng", "ㄖㄥ"),
    ("rang", "ㄖㄤ"),     ("ping", "ㄆㄧㄥ"),   ("piao", "ㄆㄧㄠ"),
    ("pian", "ㄆㄧㄢ"),   ("peng", "ㄆㄥ"),     ("pang", "ㄆㄤ"),
    ("nuei", "ㄋㄨㄟ"),   ("nuan", "ㄋㄨㄢ"),   ("nong", "ㄋㄨㄥ"),
    ("niou", "ㄋㄧㄡ"),   ("ning", "ㄋㄧㄥ"),   ("niao", "ㄋㄧㄠ"),
    ("nian", "ㄋㄧㄢ"),   ("neng", "ㄋㄥ"),     ("nang", "ㄋㄤ"),
    ("miou", "ㄇㄧㄡ"),   ("ming", "ㄇㄧㄥ"),   ("miao", "ㄇㄧㄠ"),
    ("mian", "ㄇㄧㄢ"),   ("meng", "ㄇㄥ"),     ("mang", "ㄇㄤ"),
    ("luan", "ㄌㄨㄢ"),   ("long", "ㄌㄨㄥ"),   ("liou", "ㄌㄧㄡ"),
    ("ling", "ㄌㄧㄥ"),   ("liao", "ㄌㄧㄠ"),   ("lian", "ㄌㄧㄢ"),
    ("leng", "ㄌㄥ"),     ("lang", "ㄌㄤ"),     ("kuei", "ㄎㄨㄟ"),
    ("kuan", "ㄎㄨㄢ"),   ("kuai", "ㄎㄨㄞ"),   ("kong", "ㄎㄨㄥ"),
    ("keng", "ㄎㄥ"),     ("kang", "ㄎㄤ"),     ("jyun", "ㄐㄩㄣ"),
    ("jiou", "ㄐㄧㄡ"),   ("jing", "ㄐㄧㄥ"),   ("jiao", "ㄐㄧㄠ"),
    ("jian", "ㄐㄧㄢ"),   ("jhuo", "ㄓㄨㄛ"),   ("jhun", "ㄓㄨㄣ"),
    ("jhua", "ㄓㄨㄚ"),   ("jhou", "ㄓㄡ"),     ("jhih", "ㄓ"),
    ("jhen", "ㄓㄣ"),     ("jhei", "ㄓㄟ"),     ("jhao", "ㄓㄠ"),
    ("jhan", "ㄓㄢ"),     ("jhai", "ㄓㄞ"),     ("huei", "ㄏㄨㄟ"),
    ("huan", "ㄏㄨㄢ"),   ("huai", "ㄏㄨㄞ"),   ("hong", "ㄏㄨㄥ"),
    ("heng", "ㄏㄥ"),     ("hang", "ㄏㄤ"),     ("guei", "ㄍㄨㄟ"),
    ("guan", "ㄍㄨㄢ"),   ("guai", "ㄍㄨㄞ"),   ("gong", "ㄍㄨㄥ"),
    ("geng", "ㄍㄥ"),     ("gang", "ㄍㄤ"),     ("fong", "ㄈㄥ"),
    ("fang", "ㄈㄤ"),     ("duei", "ㄉㄨㄟ"),   ("duan", "ㄉㄨㄢ"),
    ("dong", "ㄉㄨㄥ"),   ("diou", "ㄉㄧㄡ"),   ("ding", "ㄉㄧㄥ"),
    ("diao", "ㄉㄧㄠ"),   ("dian", "ㄉㄧㄢ"),   ("deng", "ㄉㄥ"),
    ("dang", "ㄉㄤ"),     ("chuo", "ㄔㄨㄛ"),   ("chun", "ㄔㄨㄣ"),
    ("chua", "ㄔㄨㄚ"),   ("chou", "ㄔㄡ"),     ("chih", "ㄔ"),
    ("chen", "ㄔㄣ"),     ("chao", "ㄔㄠ"),     ("chan", "ㄔㄢ"),
    ("chai", "ㄔㄞ"),     ("bing", "ㄅㄧㄥ"),   ("biao", "ㄅㄧㄠ"),
    ("bian", "ㄅㄧㄢ"),   ("beng", "ㄅㄥ"),     ("bang", "ㄅㄤ"),
    ("cie", "ㄑㄧㄝ"),    ("yue", "ㄩㄝ"),      ("tie", "ㄊㄧㄝ"),
    ("sie", "ㄒㄧㄝ"),    ("pie", "ㄆㄧㄝ"),    ("nie", "ㄋㄧㄝ"),
    ("mie", "ㄇㄧㄝ"),    ("lie", "ㄌㄧㄝ"),    ("jie", "ㄐㄧㄝ"),
    ("die", "ㄉㄧㄝ"),    ("cyu", "ㄑㄩ"),      ("cuo", "ㄘㄨㄛ"),
    ("cun", "ㄘㄨㄣ"),    ("cou", "ㄘㄡ"),      ("cin", "ㄑㄧㄣ"),
    ("cih", "ㄘ"),        ("cia", "ㄑㄧㄚ"),    ("cen", "ㄘㄣ"),
    ("cao", "ㄘㄠ"),      ("can", "ㄘㄢ"),      ("cai", "ㄘㄞ"),
    ("bie", "ㄅㄧㄝ"),    ("gin", "ㄍㄧㄣ"),    ("den", "ㄉㄣ"),
    ("zuo", "ㄗㄨㄛ"),    ("zun", "ㄗㄨㄣ"),    ("zou", "ㄗㄡ"),
    ("zih", "ㄗ"),        ("zen", "ㄗㄣ"),      ("zei", "ㄗㄟ"),
    ("zao", "ㄗㄠ"),      ("zan", "ㄗㄢ"),      ("zai", "ㄗㄞ"),
    ("yun", "ㄩㄣ"),      ("you", "ㄧㄡ"),      ("yin", "ㄧㄣ"),
    ("yao", "ㄧㄠ"),      ("yan", "ㄧㄢ"),      ("yai", "ㄧㄞ"),
    ("wun", "ㄨㄣ"),      ("wei", "ㄨㄟ"),      ("wan", "ㄨㄢ"),
    ("wai", "ㄨㄞ"),      ("tuo", "ㄊㄨㄛ"),    ("tun", "ㄊㄨㄣ"),
    ("tou", "ㄊㄡ"),      ("tao", "ㄊㄠ"),      ("tan", "ㄊㄢ"),
    ("tai", "ㄊㄞ"),      ("syu", "ㄒㄩ"),      ("suo", "ㄙㄨㄛ"),
    ("sun", "ㄙㄨㄣ"),    ("sou", "ㄙㄡ"),      ("sin", "ㄒㄧㄣ"),
    ("sih", "ㄙ"),        ("sia", "ㄒㄧㄚ"),    ("shu", "ㄕㄨ"),
    ("she", "ㄕㄜ"),      ("sha", "ㄕㄚ"),      ("sen", "ㄙㄣ"),
    ("sao", "ㄙㄠ"),      ("san", "ㄙㄢ"),      ("sai", "ㄙㄞ"),
    ("ruo", "ㄖㄨㄛ"),    ("run", "ㄖㄨㄣ"),    ("rou", "ㄖㄡ"),
    ("rih", "ㄖ"),        ("ren", "ㄖㄣ"),      ("rao", "ㄖㄠ"),
    ("ran", "ㄖㄢ"),      ("pou", "ㄆㄡ"),      ("pin", "ㄆㄧㄣ"),
    ("pia", "ㄆㄧㄚ"),    ("pen", "ㄆㄣ"),      ("pei", "ㄆㄟ"),
    ("pao", "ㄆㄠ"),      ("pan", "ㄆㄢ"),      ("pai", "ㄆㄞ"),
    ("nyu", "ㄋㄩ"),      ("nuo", "ㄋㄨㄛ"),    ("nun", "ㄋㄨㄣ"),
    ("nou", "ㄋㄡ"),      ("nin", "ㄋㄧㄣ"),    ("nen", "ㄋㄣ"),
    ("nei", "ㄋㄟ"),      ("nao", "ㄋㄠ"),      ("nan", "ㄋㄢ"),
    ("nai", "ㄋㄞ"),      ("mou", "ㄇㄡ"),      ("min", "ㄇㄧㄣ"),
    ("men", "ㄇㄣ"),      ("mei", "ㄇㄟ"),      ("mao", "ㄇㄠ"),
    ("man", "ㄇㄢ"),      ("mai", "ㄇㄞ"),      ("lyu", "ㄌㄩ"),
    ("luo", "ㄌㄨㄛ"),    ("lun", "ㄌㄨㄣ"),    ("lou", "ㄌㄡ"),
    ("lin", "ㄌㄧㄣ"),    ("lia", "ㄌㄧㄚ"),    ("lei", "ㄌㄟ"),
    ("lao", "ㄌㄠ"),      ("lan", "ㄌㄢ"),      ("lai", "ㄌㄞ"),
    ("kuo", "ㄎㄨㄛ"),    ("kun", "ㄎㄨㄣ"),    ("kua", "ㄎㄨㄚ"),
    ("kou", "ㄎㄡ"),      ("ken", "ㄎㄣ"),      ("kao", "ㄎㄠ"),
    ("kan", "ㄎㄢ"),      ("kai", "ㄎㄞ"),      ("jyu", "ㄐㄩ"),
    ("jin", "ㄐㄧㄣ"),    ("jia", "ㄐㄧㄚ"),    ("jhu", "ㄓㄨ"),
    ("jhe", "ㄓㄜ"),      ("jha", "ㄓㄚ"),      ("huo", "ㄏㄨㄛ"),
    ("hun", "ㄏㄨㄣ"),    ("hua", "ㄏㄨㄚ"),    ("hou", "ㄏㄡ"),
    ("hen", "ㄏㄣ"),      ("hei", "ㄏㄟ"),      ("hao", "ㄏㄠ"),
    ("han", "ㄏㄢ"),      ("hai", "ㄏㄞ"),      ("guo", "ㄍㄨㄛ"),
    ("gun", "ㄍㄨㄣ"),    ("gue", "ㄍㄨㄜ"),    ("gua", "ㄍㄨㄚ"),
    ("gou", "ㄍㄡ"),      ("gen", "ㄍㄣ"),      ("gei", "ㄍㄟ"),
    ("gao", "ㄍㄠ"),      ("gan", "ㄍㄢ"),      ("gai", "ㄍㄞ"),
    ("fou", "ㄈㄡ"),      ("fen", "ㄈㄣ"),      ("fei", "ㄈㄟ"),
    ("fan", "ㄈㄢ"),      ("eng", "ㄥ"),        ("duo", "ㄉㄨㄛ"),
    ("dun", "ㄉㄨㄣ"),    ("dou", "ㄉㄡ"),      ("dia", "ㄉㄧㄚ"),
    ("dei", "ㄉㄟ"),      ("dao", "ㄉㄠ"),      ("dan", "ㄉㄢ"),
    ("dai", "ㄉㄞ"),      ("chu", "ㄔㄨ"),      ("che", "ㄔㄜ"),
    ("cha", "ㄔㄚ"),      ("bin", "ㄅㄧㄣ"),    ("ben", "ㄅㄣ"),
    ("bei", "ㄅㄟ"),      ("bao", "ㄅㄠ"),      ("ban", "ㄅㄢ"),
    ("bai", "ㄅㄞ"),      ("ang", "ㄤ"),        ("yia", "ㄧㄚ"),
    ("ye", "ㄧㄝ"),       ("cu", "ㄘㄨ"),       ("ci", "ㄑㄧ"),
    ("ce", "ㄘㄜ"),       ("ca", "ㄘㄚ"),       ("zu", "ㄗㄨ"),
    ("ze", "ㄗㄜ"),       ("za", "ㄗㄚ"),       ("yu", "ㄩ"),
    ("yo", "ㄧㄛ"),       ("yi", "ㄧ"),         ("wu", "ㄨ"),
    ("wo", "ㄨㄛ"),       ("wa", "ㄨㄚ"),       ("tu", "ㄊㄨ"),
    ("ti", "ㄊㄧ"),       ("te", "ㄊㄜ"),       ("ta", "ㄊㄚ"),
    ("su", "ㄙㄨ"),       ("si", "ㄒㄧ"),       ("se", "ㄙㄜ"),
    ("sa", "ㄙㄚ"),       ("ru", "ㄖㄨ"),       ("re", "ㄖㄜ"),
    ("pu", "ㄆㄨ"),       ("po", "ㄆㄛ"),       ("pi", "ㄆㄧ"),
    ("pa", "ㄆㄚ"),       ("ou", "ㄡ"),         ("nu", "ㄋㄨ"),
    ("ni", "ㄋㄧ"),       ("ne", "ㄋㄜ"),       ("na", "ㄋㄚ"),
    ("mu", "ㄇㄨ"),       ("mo", "ㄇㄛ"),       ("mi", "ㄇㄧ"),
    ("me", "ㄇㄜ"),       ("ma", "ㄇㄚ"),       ("lu", "ㄌㄨ"),
    ("lo", "ㄌㄛ"),       ("li", "ㄌㄧ"),       ("le", "ㄌㄜ"),
    ("la", "ㄌㄚ"),       ("ku", "ㄎㄨ"),       ("ke", "ㄎㄜ"),
    ("ka", "ㄎㄚ"),       ("ji", "ㄐㄧ"),       ("hu", "ㄏㄨ"),
    ("he", "ㄏㄜ"),       ("ha", "ㄏㄚ"),       ("gu", "ㄍㄨ"),
    ("ge", "ㄍㄜ"),       ("ga", "ㄍㄚ"),       ("fu", "ㄈㄨ"),
    ("fo", "ㄈㄛ"),       ("fa", "ㄈㄚ"),       ("er", "ㄦ"),
    ("en", "ㄣ"),         ("ei", "ㄟ"),         ("eh", "ㄝ"),
    ("du", "ㄉㄨ"),       ("di", "ㄉㄧ"),       ("de", "ㄉㄜ"),
    ("da", "ㄉㄚ"),       ("bu", "ㄅㄨ"),       ("bo", "ㄅㄛ"),
    ("bi", "ㄅㄧ"),       ("ba", "ㄅㄚ"),       ("ao", "ㄠ"),
    ("an", "ㄢ"),         ("ai", "ㄞ"),         ("c", "ㄑ"),
    ("o", "ㄛ"),          ("e", "ㄜ"),          ("a", "ㄚ"),
];

pub static WADE_GILES_PINYIN_SYLLABLES: &[(&str, &str)] = &[
    ("a", "ㄚ"),           ("ai", "ㄞ"),         ("an", "ㄢ"),
    ("ang", "ㄤ"),         ("ao", "ㄠ"),         ("cha", "ㄓㄚ"),
    ("chai", "ㄓㄞ"),      ("chan", "ㄓㄢ"),     ("chang", "ㄓㄤ"),
    ("chao", "ㄓㄠ"),      ("che", "ㄓㄜ"),      ("chei", "ㄓㄟ"),
    ("chen", "ㄓㄣ"),      ("cheng", "ㄓㄥ"),    ("chi", "ㄐㄧ"),
    ("chia", "ㄐㄧㄚ"),    ("chiang", "ㄐㄧㄤ"), ("chiao", "ㄐㄧㄠ"),
    ("chieh", "ㄐㄧㄝ"),   ("chien", "ㄐㄧㄢ"),  ("chih", "ㄓ"),
    ("chin", "ㄐㄧㄣ"),    ("ching", "ㄐㄧㄥ"),  ("chiu", "ㄐㄧㄡ"),
    ("chiung", "ㄐㄩㄥ"),  ("cho", "ㄓㄨㄛ"),    ("chou", "ㄓㄡ"),
    ("chu", "ㄓㄨ"),       ("chua", "ㄓㄨㄚ"),   ("chuai", "ㄓㄨㄞ"),
    ("chuan", "ㄓㄨㄢ"),   ("chuang", "ㄓㄨㄤ"), ("chui", "ㄓㄨㄟ"),
    ("chun", "ㄓㄨㄣ"),    ("chung", "ㄓㄨㄥ"),  ("ch'a", "ㄔㄚ"),
    ("ch'ai", "ㄔㄞ"),     ("ch'an", "ㄔㄢ"),    ("ch'ang", "ㄔㄤ"),
    ("ch'ao", "ㄔㄠ"),     ("ch'e", "ㄔㄜ"),     ("ch'en", "ㄔㄣ"),
    ("ch'eng", "ㄔㄥ"),    ("ch'i", "ㄑㄧ"),     ("ch'ia", "ㄑㄧㄚ"),
    ("ch'iang", "ㄑㄧㄤ"), ("ch'iao", "ㄑㄧㄠ"), ("ch'ieh", "ㄑㄧㄝ"),
    ("ch'ien", "ㄑㄧㄢ"),  ("ch'ih", "ㄔ"),      ("ch'in", "ㄑㄧㄣ"),
    ("ch'ing", "ㄑㄧㄥ"),  ("ch'iu", "ㄑㄧㄡ"),  ("ch'iung", "ㄑㄩㄥ"),
    ("ch'o", "ㄔㄨㄛ"),    ("ch'ou", "ㄔㄡ"),    ("ch'u", "ㄔㄨ"),
    ("ch'ua", "ㄔㄨㄚ"),   ("ch'uai", "ㄔㄨㄞ"), ("ch'uan", "ㄔㄨㄢ"),
    ("ch'uang", "ㄔㄨㄤ"), ("ch'ui", "ㄔㄨㄟ"),  ("ch'un", "ㄔㄨㄣ"),
    ("ch'ung", "ㄔㄨㄥ"),  ("ch'v", "ㄑㄩ"),     ("ch'van", "ㄑㄩㄢ"),
    ("ch'veh", "ㄑㄩㄝ"),  ("ch'vn", "ㄑㄩㄣ"),  ("chv", "ㄐㄩ"),
    ("chvan", "ㄐㄩㄢ"),   ("chveh", "ㄐㄩㄝ"),  ("chvn", "ㄐㄩㄣ"),
    ("e", "ㄜ"),           ("ei", "ㄟ"),         ("en", "ㄣ"),
    ("erh", "ㄦ"),         ("fa", "ㄈㄚ"),       ("fan", "ㄈㄢ"),
    ("fang", "ㄈㄤ"),      ("fei", "ㄈㄟ"),      ("fen", "ㄈㄣ"),
    ("feng", "ㄈㄥ"),      ("fo", "ㄈㄛ"),       ("fou", "ㄈㄡ"),
    ("fu", "ㄈㄨ"),        ("ha", "ㄏㄚ"),       ("hai", "ㄏㄞ"),
    ("han", "ㄏㄢ"),       ("hang", "ㄏㄤ"),     ("hao", "ㄏㄠ"),
    ("hei", "ㄏㄟ"),       ("hen", "ㄏㄣ"),      ("heng", "ㄏㄥ"),
    ("ho", "ㄏㄜ"),        ("hou", "ㄏㄡ"),      ("hsi", "ㄒㄧ"),
    ("hsia", "ㄒㄧㄚ"),    ("hsiang", "ㄒㄧㄤ"), ("hsiao", "ㄒㄧㄠ"),
    ("hsieh", "ㄒㄧㄝ"),   ("hsien", "ㄒㄧㄢ"),  ("hsin", "ㄒㄧㄣ"),
    ("hsing", "ㄒㄧㄥ"),   ("hsiu", "ㄒㄧㄡ"),   ("hsiung", "ㄒㄩㄥ"),
    ("hsv", "ㄒㄩ"),       ("hsvan", "ㄒㄩㄢ"),  ("hsveh", "ㄒㄩㄝ"),
    ("hsvn", "ㄒㄩㄣ"),    ("hu", "ㄏㄨ"),       ("hua", "ㄏㄨㄚ"),
    ("huai", "ㄏㄨㄞ"),    ("huan", "ㄏㄨㄢ"),   ("huang", "ㄏㄨㄤ"),
    ("hui", "ㄏㄨㄟ"),     ("hun", "ㄏㄨㄣ"),    ("hung", "ㄏㄨㄥ"),
    ("huo", "ㄏㄨㄛ"),     ("i", "ㄧ"),          ("jan", "ㄖㄢ"),
    ("jang", "ㄖㄤ"),      ("jao", "ㄖㄠ"),      ("je", "ㄖㄜ"),
    ("jen", "ㄖㄣ"),       ("jeng", "ㄖㄥ"),     ("jih", "ㄖ"),
    ("jo", "ㄖㄨㄛ"),      ("jou", "ㄖㄡ"),      ("ju", "ㄖㄨ"),
    ("juan", "ㄖㄨㄢ"),    ("jui", "ㄖㄨㄟ"),    ("jun", "ㄖㄨㄣ"),
    ("jung", "ㄖㄨㄥ"),    ("ka", "ㄍㄚ"),       ("kai", "ㄍㄞ"),
    ("kan", "ㄍㄢ"),       ("kang", "ㄍㄤ"),     ("kao", "ㄍㄠ"),
    ("kei", "ㄍㄟ"),       ("ken", "ㄍㄣ"),      ("keng", "ㄍㄥ"),
    ("ko", "ㄍㄜ"),        ("kou", "ㄍㄡ"),      ("ku", "ㄍㄨ"),
    ("kua", "ㄍㄨㄚ"),     ("kuai", "ㄍㄨㄞ"),   ("kuan", "ㄍㄨㄢ"),
    ("kuang", "ㄍㄨㄤ"),   ("kuei", "ㄍㄨㄟ"),   ("kun", "ㄍㄨㄣ"),
    ("kung", "ㄍㄨㄥ"),    ("kuo", "ㄍㄨㄛ"),    ("k'a", "ㄎㄚ"),
    ("k'ai", "ㄎㄞ"),      ("k'an", "ㄎㄢ"),     ("k'ang", "ㄎㄤ"),
    ("k'ao", "ㄎㄠ"),      ("k'en", "ㄎㄣ"),     ("k'eng", "ㄎㄥ"),
    ("k'o", "ㄎㄜ"),       ("k'ou", "ㄎㄡ"),     ("k'u", "ㄎㄨ"),
    ("k'ua", "ㄎㄨㄚ"),    ("k'uai", "ㄎㄨㄞ"),  ("k'uan", "ㄎㄨㄢ"),
    ("k'uang", "ㄎㄨㄤ"),  ("k'uei", "ㄎㄨㄟ"),  ("k'un", "ㄎㄨㄣ"),
    ("k'ung", "ㄎㄨㄥ"),   ("k'uo", "ㄎㄨㄛ"),   ("la", "ㄌㄚ"),
    ("lai", "ㄌㄞ"),       ("lan", "ㄌㄢ"),      ("lang", "ㄌㄤ"),
    ("lao", "ㄌㄠ"),       ("le", "ㄌㄜ"),       ("lei", "ㄌㄟ"),
    ("leng", "ㄌㄥ"),      ("li", "ㄌㄧ"),       ("lia", "ㄌㄧㄚ"),
    ("liang", "ㄌㄧㄤ"),   ("liao", "ㄌㄧㄠ"),   ("lieh", "ㄌㄧㄝ"),
    ("lien", "ㄌㄧㄢ"),    ("lin", "ㄌㄧㄣ"),    ("ling", "ㄌㄧㄥ"),
    ("liu", "ㄌㄧㄡ"),     ("lo", "ㄌㄨㄛ"),     ("lou", "ㄌㄡ"),
    ("lu", "ㄌㄨ"),        ("luan", "ㄌㄨㄢ"),   ("lun", "ㄌㄨㄣ"),
    ("lung", "ㄌㄨㄥ"),    ("lv", "ㄌㄩ"),       ("lveh", "ㄌㄩㄝ"),
    ("lvn", "ㄌㄩㄣ"),     ("ma", "ㄇㄚ"),       ("mai", "ㄇㄞ"),
    ("man", "ㄇㄢ"),       ("mang", "ㄇㄤ"),     ("mao", "ㄇㄠ"),
    ("me", "ㄇㄜ"),        ("mei", "ㄇㄟ"),      ("men", "ㄇㄣ"),
    ("meng", "ㄇㄥ"),      ("mi", "ㄇㄧ"),       ("miao", "ㄇㄧㄠ"),
    ("mieh", "ㄇㄧㄝ"),    ("mien", "ㄇㄧㄢ"),   ("min", "ㄇㄧㄣ"),
    ("ming", "ㄇㄧㄥ"),    ("miu", "ㄇㄧㄡ"),    ("mo", "ㄇㄛ"),
    ("mou", "ㄇㄡ"),       ("mu", "ㄇㄨ"),       ("na", "ㄋㄚ"),
    ("nai", "ㄋㄞ"),       ("nan", "ㄋㄢ"),      ("nang", "ㄋㄤ"),
    ("nao", "ㄋㄠ"),       ("ne", "ㄋㄜ"),       ("nei", "ㄋㄟ"),
    ("nen", "ㄋㄣ"),       ("neng", "ㄋㄥ"),     ("ni", "ㄋㄧ"),
    ("nia", "ㄋㄧㄚ"),     ("niang", "ㄋㄧㄤ"),  ("niao", "ㄋㄧㄠ"),
    ("nieh", "ㄋㄧㄝ"),    ("nien", "ㄋㄧㄢ"),   ("nin", "ㄋㄧㄣ"),
    ("ning", "ㄋㄧㄥ"),    ("niu", "ㄋㄧㄡ"),    ("no", "ㄋㄨㄛ"),
    ("nou", "ㄋㄡ"),       ("nu", "ㄋㄨ"),       ("nuan", "ㄋㄨㄢ"),
    ("nun", "ㄋㄨㄣ"),     ("nung", "ㄋㄨㄥ"),   ("nv", "ㄋㄩ"),
    ("nveh", "ㄋㄩㄝ"),    ("ou", "ㄡ"),         ("pa", "ㄅㄚ"),
    ("pai", "ㄅㄞ"),       ("pan", "ㄅㄢ"),      ("pang", "ㄅㄤ"),
    ("pao", "ㄅㄠ"),       ("pei", "ㄅㄟ"),      ("pen", "ㄅㄣ"),
    ("peng", "ㄅㄥ"),      ("pi", "ㄅㄧ"),       ("piao", "ㄅㄧㄠ"),
    ("pieh", "ㄅㄧㄝ"),    ("pien", "ㄅㄧㄢ"),   ("pin", "ㄅㄧㄣ"),
    ("ping", "ㄅㄧㄥ"),    ("po", "ㄅㄛ"),       ("pu", "ㄅㄨ"),
    ("p'a", "ㄆㄚ"),       ("p'ai", "ㄆㄞ"),     ("p'an", "ㄆㄢ"),
    ("p'ang", "ㄆㄤ"),     ("p'ao", "ㄆㄠ"),     ("p'ei", "ㄆㄟ"),
    ("p'en", "ㄆㄣ"),      ("p'eng", "ㄆㄥ"),    ("p'i", "ㄆㄧ"),
    ("p'iao", "ㄆㄧㄠ"),   ("p'ieh", "ㄆㄧㄝ"),  ("p'ien", "ㄆㄧㄢ"),
    ("p'in", "ㄆㄧㄣ"),    ("p'ing", "ㄆㄧㄥ"),  ("p'o", "ㄆㄛ"),
    ("p'ou", "ㄆㄡ"),      ("p'u", "ㄆㄨ"),      ("sa", "ㄙㄚ"),
    ("sai", "ㄙㄞ"),       ("san", "ㄙㄢ"),      ("sang", "ㄙㄤ"),
    ("sao", "ㄙㄠ"),       ("se", "ㄙㄜ"),       ("sei", "ㄙㄟ"),
    ("sen", "ㄙㄣ"),       ("seng", "ㄙㄥ"),     ("sha", "ㄕㄚ"),
    ("shai", "ㄕㄞ"),      ("shan", "ㄕㄢ"),     ("shang", "ㄕㄤ"),
    ("shao", "ㄕㄠ"),      ("she", "ㄕㄜ"),      ("shei", "ㄕㄟ"),
    ("shen", "ㄕㄣ"),      ("sheng", "ㄕㄥ"),    ("shih", "ㄕ"),
    ("shou", "ㄕㄡ"),      ("shu", "ㄕㄨ"),      ("shua", "ㄕㄨㄚ"),
    ("shuai", "ㄕㄨㄞ"),   ("shuan", "ㄕㄨㄢ"),  ("shuang", "ㄕㄨㄤ"),
    ("shui", "ㄕㄨㄟ"),    ("shun", "ㄕㄨㄣ"),   ("shung", "ㄕㄨㄥ"),
    ("shuo", "ㄕㄨㄛ"),    ("so", "ㄙㄨㄛ"),     ("sou", "ㄙㄡ"),
    ("ssu", "ㄙ"),         ("su", "ㄙㄨ"),       ("suan", "ㄙㄨㄢ"),
    ("sui", "ㄙㄨㄟ"),     ("sun", "ㄙㄨㄣ"),    ("sung", "ㄙㄨㄥ"),
    ("ta", "ㄉㄚ"),        ("tai", "ㄉㄞ"),      ("tan", "ㄉㄢ"),
    ("tang", "ㄉㄤ"),      ("tao", "ㄉㄠ"),      ("te", "ㄉㄜ"),
    ("tei", "ㄉㄟ"),       ("ten", "ㄉㄣ"),      ("teng", "ㄉㄥ"),
    ("ti", "ㄉㄧ"),        ("tiang", "ㄉㄧㄤ"),  ("tiao", "ㄉㄧㄠ"),
    ("tieh", "ㄉㄧㄝ"),    ("tien", "ㄉㄧㄢ"),   ("ting", "ㄉㄧㄥ"),
    ("tiu", "ㄉㄧㄡ"),     ("to", "ㄉㄨㄛ"),     ("tou", "ㄉㄡ"),
    ("tsa", "ㄗㄚ"),       ("tsai", "ㄗㄞ"),     ("tsan", "ㄗㄢ"),
    ("tsang", "ㄗㄤ"),     ("tsao", "ㄗㄠ"),     ("tse", "ㄗㄜ"),
    ("tsei", "ㄗㄟ"),      ("tsen", "ㄗㄣ"),     ("tseng", "ㄗㄥ"),
    ("tso", "ㄗㄨㄛ"),     ("tsou", "ㄗㄡ"),     ("tsu", "ㄗㄨ"),
    ("tsuan", "ㄗㄨㄢ"),   ("tsui", "ㄗㄨㄟ"),   ("tsun", "ㄗㄨㄣ"),
    ("tsung", "ㄗㄨㄥ"),   ("ts'a", "ㄘㄚ"),     ("ts'ai", "ㄘㄞ"),
    ("ts'an", "ㄘㄢ"),     ("ts'ang", "ㄘㄤ"),   ("ts'ao", "ㄘㄠ"),
    ("ts'e", "ㄘㄜ"),      ("ts'en", "ㄘㄣ"),    ("ts'eng", "ㄘㄥ"),
    ("ts'o", "ㄘㄨㄛ"),    ("ts'ou", "ㄘㄡ"),    ("ts'u", "ㄘㄨ"),
    ("ts'uan", "ㄘㄨㄢ"),  ("ts'ui", "ㄘㄨㄟ"),  ("ts'un", "ㄘㄨㄣ"),
    ("ts'ung", "ㄘㄨㄥ"),  ("tu", "ㄉㄨ"),       ("tuan", "ㄉㄨㄢ"),
    ("tui", "ㄉㄨㄟ"),     ("tun", "ㄉㄨㄣ"),    ("tung", "ㄉㄨㄥ"),
    ("tzu", "ㄗ"),         ("tz'u", "ㄘ"),       ("t'a", "ㄊㄚ"),
    ("t'ai", "ㄊㄞ"),      ("t'an", "ㄊㄢ"),     ("t'ang", "ㄊㄤ"),
    ("t'ao", "ㄊㄠ"),      ("t'e", "ㄊㄜ"),      ("t'eng", "ㄊㄥ"),
    ("t'i", "ㄊㄧ"),       ("t'iao", "ㄊㄧㄠ"),  ("t'ieh", "ㄊㄧㄝ"),
    ("t'ien", "ㄊㄧㄢ"),   ("t'ing", "ㄊㄧㄥ"),  ("t'o", "ㄊㄨㄛ"),
    ("t'ou", "ㄊㄡ"),      ("t'u", "ㄊㄨ"),      ("t'uan", "ㄊㄨㄢ"),
    ("t'ui", "ㄊㄨㄟ"),    ("t'un", "ㄊㄨㄣ"),   ("t'ung", "ㄊㄨㄥ"),
    ("wa", "ㄨㄚ"),        ("wai", "ㄨㄞ"),      ("wan", "ㄨㄢ"),
    ("wang", "ㄨㄤ"),      ("wei", "ㄨㄟ"),      ("wen", "ㄨㄣ"),
    ("weng", "ㄨㄥ"),      ("wo", "ㄨㄛ"),       ("wu", "ㄨ"),
    ("ya", "ㄧㄚ"),        ("yan", "ㄧㄢ"),      ("yang", "ㄧㄤ"),
    ("yao", "ㄧㄠ"),       ("yeh", "ㄧㄝ"),      ("yin", "ㄧㄣ"),
    ("ying", "ㄧㄥ"),      ("yu", "ㄧㄡ"),       ("yung", "ㄩㄥ"),
    ("yv", "ㄩ"),          ("yvan", "ㄩㄢ"),     ("yveh", "ㄩㄝ"),
    ("yvn", "ㄩㄣ"),
];

fn build(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    pairs.iter().copied().collect()
}

static SECONDARY_MAP: Lazy<HashMap<&str, &str>> =
    Lazy::new(|| build(SECONDARY_PINYIN_SYLLABLES));
static YALE_MAP: Lazy<HashMap<&str, &str>> = Lazy::new(|| build(YALE_PINYIN_SYLLABLES));
static HUALUO_MAP: Lazy<HashMap<&str, &str>> = Lazy::new(|| build(HUALUO_PINYIN_SYLLABLES));
static UNIVERSAL_MAP: Lazy<HashMap<&str, &str>> =
    Lazy::new(|| build(UNIVERSAL_PINYIN_SYLLABLES));
static WADE_GILES_MAP: Lazy<HashMap<&str, &str>> =
    Lazy::new(|| build(WADE_GILES_PINYIN_SYLLABLES));

/// Bopomofo expansion of a complete romanized syllable, if the scheme
/// knows it. `None` for non-romanization layouts.
pub fn syllable_to_phona(layout: MandarinLayout, syllable: &str) -> Option<&'static str> {
    let table: &'static HashMap<&'static str, &'static str> = match layout {
        MandarinLayout::HanyuPinyin => &HANYU_PINYIN_MAP,
        MandarinLayout::SecondaryPinyin => &SECONDARY_MAP,
        MandarinLayout::YalePinyin => &YALE_MAP,
        MandarinLayout::HualuoPinyin => &HUALUO_MAP,
        MandarinLayout::UniversalPinyin => &UNIVERSAL_MAP,
        MandarinLayout::WadeGilesPinyin => &WADE_GILES_MAP,
        _ => return None,
    };
    table.get(syllable).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemes_spell_the_same_syllable_differently() {
        let cases = [
            (MandarinLayout::HanyuPinyin, "zhong"),
            (MandarinLayout::SecondaryPinyin, "jung"),
            (MandarinLayout::YalePinyin, "jung"),
            (MandarinLayout::HualuoPinyin, "jhong"),
            (MandarinLayout::UniversalPinyin, "jhong"),
            (MandarinLayout::WadeGilesPinyin, "chung"),
        ];
        for (layout, spelling) in cases {
            assert_eq!(
                syllable_to_phona(layout, spelling),
                Some("ㄓㄨㄥ"),
                "{layout:?} {spelling}"
            );
        }
    }

    #[test]
    fn wade_giles_distinguishes_aspiration() {
        assert_eq!(
            syllable_to_phona(MandarinLayout::WadeGilesPinyin, "ch'ung"),
            Some("ㄔㄨㄥ")
        );
        assert_eq!(
            syllable_to_phona(MandarinLayout::WadeGilesPinyin, "tzu"),
            Some("ㄗ")
        );
    }

    #[test]
    fn unknown_or_partial_spellings_miss() {
        assert_eq!(syllable_to_phona(MandarinLayout::HanyuPinyin, "zh"), None);
        assert_eq!(syllable_to_phona(MandarinLayout::Dachen, "zhong"), None);
    }
}
