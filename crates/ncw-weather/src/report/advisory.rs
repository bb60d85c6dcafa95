//! Emergency broadcasts and mechanical advisories.
//!
//! Static text keyed by condition name or temperature band. Rule text is
//! from the Night City Weather supplement for Cyberpunk RED.

/// Source link appended to every advisory.
pub const SOURCE_LINK: &str =
    "[(NCW)](https://rtalsoriangames.com/wp-content/uploads/2021/07/RTG-CPR-NightCityWeather.pdf)";

/// Emergency broadcast line, keyed by exact condition name.
const EMERGENCIES: &[(&str, &str)] = &[
    (
        "Blood Rain",
        "🚨 **WEATHER EMERGENCY** • The sky is crying blood! All citizens advised to seek immediate shelter.",
    ),
    (
        "Acid Rain",
        "⚠️ **CORROSION ALERT** • Acidic precipitation detected. Equipment damage likely.",
    ),
    (
        "Radioactive Windstorm",
        "☢️ **RADIATION WARNING** • Hot Zone particles detected. Radiation suits essential.",
    ),
    (
        "Ash Storm",
        "🌫️ **AIR QUALITY EMERGENCY** • Toxic ash clouds detected. Breathing apparatus required.",
    ),
    (
        "Deadly Thunderstorm",
        "⛈️ **SEVERE WEATHER ALERT** • Dangerous electrical activity. Avoid metallic objects.",
    ),
    (
        "Cold Snap",
        "🧊 **FREEZE WARNING** • Sub-zero temperatures creating hazardous ice conditions.",
    ),
    (
        "Heat Wave",
        "🔥 **HEAT EMERGENCY** • Extreme temperatures pose serious health risks.",
    ),
    (
        "Dust Storm",
        "💨 **VISIBILITY ALERT** • Badlands dust storm approaching. Respiratory protection advised.",
    ),
    (
        "Inversion Smog",
        "🏭 **POLLUTION ADVISORY** • Toxic smog levels critical. Breathing apparatus mandatory.",
    ),
    (
        "Flooding",
        "🌊 **FLOOD WARNING** • Water levels rising. Avoid underground areas.",
    ),
    (
        "Blackout",
        "🔌 **INFRASTRUCTURE FAILURE** • Widespread power outages reported.",
    ),
];

/// Temperature advisories, keyed by a substring of the temperature band.
const TEMPERATURE_EFFECTS: &[(&[&str], &str)] = &[
    (
        &["Cold (Around 35°F", "Cold (Around 40°F"],
        "❄️ **Cold Temperature**: The temperature is below normal tolerance limits for the average person. Anyone who spends most of the day outside or inside but in non-heated environment without proper protective gear suffers damage via Exposure (CP:R page 181).",
    ),
    (
        &["Hot (Around"],
        "🔥 **Hot Temperature**: The temperature has risen to an uncomfortable degree. Increase any preexisting Armor Penalty to REF, DEX, and MOVE by 1. For example, a -2 penalty becomes a -3 penalty.",
    ),
];

/// Condition advisories, keyed by exact condition name.
const CONDITION_EFFECTS: &[(&str, &str)] = &[
    (
        "Acid Rain",
        "☣️ **Acid Rain**: Almost all rain that falls in Night City is lightly acidic but occasionally a storm brings precipitation so corrosive it can cause damage in a matter of hours instead of years. For each full minute spent in Acid Rain without protection, ablate all worn armor by 1 SP.",
    ),
    (
        "Ash Storm",
        "🌫️ **Ash Storm**: Fires, in both urban areas and in the Badlands, aren't uncommon in the Time of the Red. Occasionally, they burn so hot, long, and large that the wind blows the toxic ashes and smoke across Night City. Treat anyone who spends more than one minute in an Ash Storm without Nasal Filters, Anti-Smog Breathing Mask, or a similar device as if they have been exposed to a Vial of Poison (CP:R page 355). They also suffer the Foreign Object Critical Injury as the ash clogs their lungs and sinus passages, though they do not take the initial Bonus Damage. This Critical Injury can't be tended to until the patient leaves the Ash Storm. Also GMs can, at their discretion, apply a -2 penalty to any appropriate Skill Check, including Perception Checks to see and ranged attack Checks to hit a target at a distance.",
    ),
    (
        "Blood Rain",
        "🩸 **Blood Rain**: An aftereffect of the 4th Corporate War, Blood Rain is a greasy, pinkish-red form of precipitation known to carry various caustic substances, toxins, and radioactive particles. Roll 1d6. On a 1 to 3, the Blood Rain acts just like Acid Rain, although it smells much worse. On a 4 to 6, once per minute treat anyone exposed to the Blood Rain without protection as if they we dosed with a Vial of Biotoxin (CP:R page 355). Also GMs can, at their discretion, apply a -1 penalty to any appropriate Skill Check, including Perception Checks to see and ranged attack Checks to hit a target at a distance.",
    ),
    (
        "Cold Snap",
        "🧊 **Cold Snap**: The weather has turned incredibly cold, dropping below freezing. This overrides any roll made for Temperature on a Weather table. The rules for Exposure (CP:R page 181) apply. In addition, black ice forms everywhere, making conditions treacherous. GMs can, at their discretion, apply a -2 penalty to any appropriate Skill Check made while on icy surfaces.",
    ),
    (
        "Deadly Thunderstorm",
        "⚡ **Deadly Thunderstorm**: While thunderstorms are rare in Night City, when they happen they trend towards incredibly destructive. Once per ten minute period during the storm, the GM should roll 1d6. On a 1 to 3, the lightning strikes far away. On a 4 to 6, the lighting strikes the tallest nearby structure or natural feature. If there is no such structure or natural feature nearby, it strikes either the tallest Character or the Character holding a two-handed metal weapon. If the Character struck is touching another Character (for example, via a Grapple) they are both struck. Anyone hit by lightning takes 6d6 damage to their body and the lightning strike counts as a flashbang grenade (CP:R page 346) centered on the struck Character. Also GMs can, at their discretion, apply a -2 penalty to any appropriate Skill Check, including Perception Checks to see and ranged attack Checks to hit a target at a distance.",
    ),
    (
        "Dust Storm",
        "💨 **Dust Storm**: Northern California has been in a drought since at least the 2020s, transforming much of the land outside of Night City into desert often known as the Badlands. Strong winds occasionally pick up loose particles of dust and debris from those erosion-prone wastes and blows them into the city proper. Anyone who spends more than five minutes in a Dust Storm without Nasal Filters, Anti-Smog Breathing Mask, or a similar device suffers the Foreign Object Critical Injury as the dust clogs their lungs and sinus passages, though they do not take the initial Bonus Damage. This Critical Injury can't be tended to until the patient is removed from the Dust Storm. GMs can, at their discretion, apply a -2 penalty to any appropriate Skill Check, including Perception Checks to see and ranged attack Checks to hit a target at a distance.",
    ),
    (
        "Heat Wave",
        "🔥 **Heat Wave**: Thanks to climate change, more and more often the temperature in Night City spikes into the low 100s and 110s. This overrides any roll made for Temperature on a Weather table. In such oppressive heat, those who wear bulky gear like heavy armors can suffer tremendously. The rules for Exposure (CP:R page 181) apply. Increase any preexisting Armor Penalty to REF, DEX, and MOVE by 2. For example, a -2 penalty becomes a -4 penalty.",
    ),
    (
        "Heavy Rain/Sleet",
        "🌧️ **Heavy Rain/Sleet**: Not only does heavy rain (or sleet in colder weather) make surfaces slick but it also impacts visibility. GMs can, at their discretion, apply a -2 penalty to any appropriate Skill Check, including Perception Checks to see and ranged attack Checks to hit a target at a distance.",
    ),
    (
        "Inversion Smog",
        "☁️ **Inversion Smog**: Despite the switchover from gasoline to CHOOH2, intense smog \"as thick as pea soup\" remains a problem in Night City due to lax regulations, regular fires, and industrial toxins spilling into the atmosphere. Treat anyone who spends more than one minute in an Inversion Smog without Nasal Filters, Anti-Smog Breathing Mask, or a similar device as if they have been exposed to a Vial of Poison (CP:R page 355). GMs can, at their discretion, apply a -4 penalty to any appropriate Skill Check, including Perception Checks to see and ranged attack Checks to hit a target at a distance.",
    ),
    (
        "Light Rain/Sleet",
        "💧 **Light Rain/Sleet**: A Cyberpunk classic, light rain (or sleet in colder weather) doesn't reduce visibility but can make surfaces slick. GMs can, at their discretion, apply a -1 penalty to any appropriate Skill Check such as an Athletics Check to climb a slippery fence or a Drive Land Vehicle Check to perform a maneuver on wet roads.",
    ),
    (
        "Radioactive Windstorm",
        "☢️ **Radioactive Windstorm**: Good news? The Hot Zone isn't as radioactive as it used to be. Bad news? The Hot Zone is still somewhat radioactive and strong winds occasionally blow radioactive particles into other parts of Night City. Anyone exposed to the Radioactive Winds who is not protected by a Radiation Suit or similar item is treated as if they are exposed to high level radiation (CP:R page 181). Radioactive wind burst begin at the GM's discretion and last for 1d6 Rounds.",
    ),
    (
        "Flooding",
        "🌊 **Flooding**: The nuclear blast that destroyed the Arasaka Tower back in 2022 also destabilized the fill much of Night City is built on. Repairs have been made over the years but, occasionally, ocean water seeps up through the cracks and floods a section of the city. At street level, the water levels rarely rise to above more than a few inches, making it more a nuisance than a real problem. Below ground, the flooding can fill basements and tunnels. Wading through a deeply flooded area uses the rules for an \"other form of movement\" (CP:R page 169).",
    ),
    (
        "Blackout",
        "⚡ **Blackout**: While not an actual weather condition, loss of power, CitiNet access, and communications often happens due to extreme meteorological activity. The GM can determine where the outage is (1d10 blocks or neighborhood zones centered on the crew's current location, if determining randomly). For the duration of the outage, any building in the area without a generator won't have electricity and Agents won't be able to make calls or connect to the Data Pool.",
    ),
];

/// Standing bulletin about the district blackouts, shown under every report by default.
pub const BLACKOUT_BULLETIN: &str = "Intermittent blackouts continue to affect **Little Europe**, **Old Japantown**, **The Glen**, **Little China**, **University District**, and **Upper Marina** (bordering the Hot Zone). Citizens in these areas should expect power fluctuations and prepare accordingly.\n\n**Blackout Effects**: While not an actual weather condition, loss of power, CitiNet access, and communications often happens due to extreme meteorological activity. For the duration of the outage, any building in the area without a generator won't have electricity and Agents won't be able to make calls or connect to the Data Pool.";

/// Emergency broadcast line for a condition, if it has one.
pub fn emergency_for(condition: &str) -> Option<&'static str> {
    lookup(EMERGENCIES, condition)
}

/// Advisory text for a condition, if it has mechanical effects.
pub fn condition_effect(condition: &str) -> Option<&'static str> {
    lookup(CONDITION_EFFECTS, condition)
}

/// Advisory texts triggered by a temperature band.
pub fn temperature_effects(temperature: &str) -> Vec<&'static str> {
    TEMPERATURE_EFFECTS
        .iter()
        .filter(|(needles, _)| needles.iter().any(|n| temperature.contains(n)))
        .map(|(_, text)| *text)
        .collect()
}

/// All advisories for a temperature and condition, temperature first, each
/// followed by the source link.
pub fn advisories(temperature: &str, condition: &str) -> Vec<String> {
    temperature_effects(temperature)
        .into_iter()
        .chain(condition_effect(condition))
        .map(|text| format!("{text} {SOURCE_LINK}"))
        .collect()
}

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
