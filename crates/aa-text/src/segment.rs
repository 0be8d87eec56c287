//! Segmentation d'une séquence de lignes en blocs AA.

use aa_core::ArtBlock;

/// Découpe les lignes normalisées d'un fichier en blocs, sur le marqueur.
///
/// La comparaison au marqueur est exacte : sensible à la casse, sans trim.
/// Un accumulateur reçoit chaque ligne non-marqueur suivie d'un `\n` ; un
/// marqueur n'émet un bloc que si l'accumulateur est non vide, donc des
/// marqueurs consécutifs ne créent jamais de bloc vide. L'accumulateur
/// restant après la dernière ligne est émis comme bloc final (bloc de queue
/// sans marqueur fermant). Les index 0..n-1 des blocs suivent l'ordre
/// d'émission et servent ensuite de noms de fichiers.
pub fn segment<I, S>(lines: I, marker: &str) -> Vec<ArtBlock>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut blocks = Vec::new();
    let mut acc = String::new();
    for line in lines {
        let line = line.as_ref();
        if line == marker {
            if !acc.is_empty() {
                blocks.push(ArtBlock::new(std::mem::take(&mut acc)));
            }
        } else {
            acc.push_str(line);
            acc.push('\n');
        }
    }
    if !acc.is_empty() {
        blocks.push(ArtBlock::new(acc));
    }
    blocks
}
